//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, AppConfig, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    last_tick: D::Instant,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and initial form values.
    pub fn new(driver: D, config: AppConfig) -> Self {
        let last_tick = driver.now();
        Self { driver, app: App::new(config), last_tick }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// Each cycle:
    /// 1. Waits for an input event (or the frame timeout) from the driver
    /// 2. Advances the wheel animation by the time that passed while waiting
    /// 3. Feeds the input event to the App and executes the resulting actions
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        tracing::info!("runtime started");
        self.driver.render(&self.app)?;
        self.last_tick = self.driver.now();

        let result = loop {
            match self.process_cycle().await {
                Ok(true) => break Ok(()),
                Ok(false) => {},
                Err(e) => break Err(e),
            }
        };

        self.driver.stop();
        tracing::info!("runtime stopped");
        result
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        let event = self.driver.poll_event().await?;

        let now = self.driver.now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;

        // Time spent waiting belongs to the animation that was running before
        // the event arrived.
        if self.app.is_animating() {
            let actions = self.app.handle(AppEvent::Tick { elapsed });
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }

        match event {
            Some(event) => {
                let actions = self.app.handle(event);
                self.process_actions(actions)
            },
            None => Ok(false),
        }
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
