use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    config: &Config,
    config_path: &Path,
    data_dir: &Path,
) -> CommandResultViewModel<ConfigViewModel> {
    let exists = config_path.exists();
    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        exists,
        data_dir: data_dir.display().to_string(),
        course_key: config.course_key.clone(),
        lms_base_url: config.endpoints.lms_base_url.clone(),
        lab_provider_base_url: config.endpoints.lab_provider_base_url.clone(),
        course_operations_base_url: config.endpoints.course_operations_base_url.clone(),
        auth_token_set: config.auth_token.is_some(),
        request_timeout_secs: config.request_timeout_secs,
        cooldown_ms: config.cooldown_ms,
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result.with_suggestion(
            Guidance::new("No config file yet; defaults and environment are in effect")
                .with_command("labroster config init"),
        );
    }
    result
}

pub fn present_config_init(
    config_path: &Path,
    written: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let content = ConfigInitViewModel {
        config_path: config_path.display().to_string(),
        written,
    };

    if written {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::success("Config written"))
            .with_suggestion(
                Guidance::new("Set course_key and the service URLs, then list the roster")
                    .with_command("labroster roster list"),
            )
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Config already exists"))
            .with_suggestion(
                Guidance::new("Overwrite it with defaults").with_command("labroster config init --force"),
            )
    }
}
