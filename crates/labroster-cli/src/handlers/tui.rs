//! Interactive browser handler.
//!
//! The terminal loop runs on the main thread. Network work runs on a tokio
//! runtime; every task reports back through a channel as an [`AppEvent`],
//! which the controller drains on each tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;
use crossterm::event::KeyEvent;
use tokio::runtime::Handle;
use tracing::{info, warn};

use labroster_client::{DashboardLauncher, LabApi};
use labroster_types::CourseKey;

use crate::app::{App, AppEvent};
use crate::browser::open_url;
use crate::context::ExecutionContext;
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::TuiScreenViewModel;
use crate::presentation::{TuiController, TuiRenderer};
use crate::screens::Effect;

struct EffectRunner {
    handle: Handle,
    api: Arc<dyn LabApi>,
    course: CourseKey,
    launcher: Arc<DashboardLauncher>,
    tx: Sender<AppEvent>,
}

impl EffectRunner {
    fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let tx = self.tx.clone();
        match effect {
            Effect::FetchRoster { ticket, filter } => {
                let api = Arc::clone(&self.api);
                let course = self.course.clone();
                self.handle.spawn(async move {
                    let result = api.roster_page(&course, ticket.page(), &filter).await;
                    let _ = tx.send(AppEvent::RosterLoaded { ticket, result });
                });
            }
            Effect::FetchLabs { ticket, user_id } => {
                let api = Arc::clone(&self.api);
                self.handle.spawn(async move {
                    let result = api.lab_page(&user_id, ticket.page()).await;
                    let _ = tx.send(AppEvent::LabsLoaded { ticket, result });
                });
            }
            Effect::FetchDetails {
                seq,
                lab_instance_id,
            } => {
                let api = Arc::clone(&self.api);
                self.handle.spawn(async move {
                    let result = api.lab_details(&lab_instance_id).await;
                    let _ = tx.send(AppEvent::DetailsLoaded { seq, result });
                });
            }
            Effect::CheckDashboard => {
                let launcher = Arc::clone(&self.launcher);
                self.handle.spawn(async move {
                    let available = launcher.is_available().await;
                    let _ = tx.send(AppEvent::DashboardAvailability(available));
                });
            }
            Effect::LaunchDashboard => {
                let launcher = Arc::clone(&self.launcher);
                self.handle.spawn(async move {
                    let outcome = launcher.launch(None).await;
                    let _ = tx.send(AppEvent::DashboardLaunched(outcome));
                });
            }
            Effect::OpenUrl(url) => {
                self.handle.spawn_blocking(move || {
                    let error = open_url(&url).err().map(|e| {
                        warn!(error = %e, url = %url, "could not open a browser");
                        e.to_string()
                    });
                    let _ = tx.send(AppEvent::UrlOpened { url, error });
                });
            }
        }
    }
}

struct TuiSession {
    app: App,
    runner: EffectRunner,
    rx: Receiver<AppEvent>,
}

impl TuiController for TuiSession {
    fn on_key(&mut self, key: KeyEvent) {
        let effects = self.app.handle_key(key);
        self.runner.run_all(effects);
    }

    fn on_tick(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            let effects = self.app.handle_event(event);
            self.runner.run_all(effects);
        }
    }

    fn screen(&self) -> TuiScreenViewModel {
        present_screen(&self.app)
    }

    fn should_quit(&self) -> bool {
        self.app.should_quit()
    }
}

pub fn handle(ctx: &ExecutionContext, route: Option<&str>) -> Result<()> {
    let course = ctx.course()?;
    let api = ctx.api()?;
    let launcher = Arc::new(ctx.dashboard_launcher(course.clone())?);
    let runtime = ctx.runtime()?;

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))?;
    }

    let (tx, rx) = mpsc::channel();
    let runner = EffectRunner {
        handle: runtime.handle().clone(),
        api,
        course: course.clone(),
        launcher,
        tx,
    };

    let mut app = App::new(course.clone());
    runner.run_all(app.start());
    if let Some(route) = route {
        runner.run_all(app.open_route(route));
    }

    info!(course = %course, "starting interactive browser");
    let mut session = TuiSession { app, runner, rx };
    let result = TuiRenderer::new(interrupted).run(&mut session);

    // In-flight requests are abandoned.
    runtime.shutdown_background();
    result
}
