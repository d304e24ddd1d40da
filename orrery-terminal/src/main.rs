/// Orrery - Animated solar system in the terminal
///
/// Renders nine bodies through a hand-written modelview pipeline.
/// Controls:
///   - Space: Pause the animation
///   - Q/ESC: Quit

use std::io;
use orrery_terminal::{TerminalApp, TITLE};

fn main() -> io::Result<()> {
    env_logger::init();

    println!("{TITLE} - starting (press Q to quit)...");

    let mut app = TerminalApp::new()?;
    app.run()?;

    Ok(())
}
