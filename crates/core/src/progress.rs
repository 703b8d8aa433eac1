//! Progress ticker for blocking build phases
//!
//! Renders a spinner frame next to a label on stderr while a blocking
//! subprocess call runs on the calling thread. The ticker is bounded by
//! the lifetime of that call: [`Ticker::finish`] (or drop) flips a stop
//! flag and joins the render thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use console::Term;

const FRAMES: [&str; 4] = ["-", "\\", "|", "/"];
const TICK: Duration = Duration::from_millis(100);

/// A cooperative progress indicator driven by a background thread.
pub struct Ticker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start rendering `label` on stderr.
    ///
    /// When stderr is not a terminal nothing is rendered, but the ticker
    /// still stops and joins normally.
    pub fn start(label: &str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let label = label.to_string();

        let handle = thread::spawn(move || {
            let term = Term::stderr();
            let render = term.is_term();
            let mut frame = 0usize;

            while flag.load(Ordering::Relaxed) {
                if render {
                    let line = format!("\r{} {}", label, FRAMES[frame % FRAMES.len()]);
                    let _ = term.write_str(&line);
                }
                frame += 1;
                thread::sleep(TICK);
            }

            if render {
                let _ = term.clear_line();
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop the render thread and wait for it to exit.
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
