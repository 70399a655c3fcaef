use log::info;

use crate::error::{Error, Result};

/// How long an [`EventHandler`] keeps its tap installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Install the tap just to make the system show the accessibility
    /// prompt, then release it again
    Provisional,
    /// Intercept keystrokes until [`EventHandler::stop`]
    Active,
}

/// Owner of one interception session at a time
///
/// Each successful `start` creates a new key processor; `stop` discards it.
/// Dropping the handler stops interception.
pub struct EventHandler {
    #[cfg(target_os = "macos")]
    session: Option<crate::tap::TapSession>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            session: None,
        }
    }

    /// Start intercepting keystrokes
    ///
    /// Does nothing if interception is already running.
    pub fn start(&mut self, mode: Mode) -> Result<()> {
        if self.is_enabled() {
            return Ok(());
        }

        #[cfg(target_os = "macos")]
        {
            let session = match crate::tap::TapSession::start() {
                Ok(session) => session,
                Err(Error::TapCreation) if !crate::permissions::is_process_trusted(false) => {
                    return Err(Error::PermissionDenied);
                }
                Err(e) => return Err(e),
            };
            self.session = Some(session);
            info!("Keyboard interception started ({:?})", mode);

            if mode == Mode::Provisional {
                self.stop();
            }
            Ok(())
        }

        #[cfg(not(target_os = "macos"))]
        {
            info!("Keyboard interception requested ({:?}) on an unsupported platform", mode);
            Err(Error::Unsupported)
        }
    }

    /// Stop intercepting keystrokes
    pub fn stop(&mut self) {
        #[cfg(target_os = "macos")]
        if let Some(mut session) = self.session.take() {
            session.stop();
            info!("Keyboard interception stopped");
        }
    }

    /// Whether keystrokes are currently being intercepted
    pub fn is_enabled(&self) -> bool {
        #[cfg(target_os = "macos")]
        {
            self.session.as_ref().is_some_and(|session| session.is_running())
        }

        #[cfg(not(target_os = "macos"))]
        {
            false
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
