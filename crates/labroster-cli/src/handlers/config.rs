use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{present_config, present_config_init};
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let result = present_config(config, ctx.config_path(), ctx.data_dir());
    ConsoleRenderer::new(ctx.format).render(&result)
}

/// Write a default config file. An existing file is kept unless `force`.
pub fn init(ctx: &ExecutionContext, course: Option<&str>, force: bool) -> Result<()> {
    let path = ctx.config_path();
    let written = if path.exists() && !force {
        false
    } else {
        let config = Config {
            course_key: course.map(str::to_string),
            ..Config::default()
        };
        config.save_to(path)?;
        info!(path = %path.display(), "wrote config");
        true
    };

    ConsoleRenderer::new(ctx.format).render(&present_config_init(path, written))
}
