/// Terminal front end for the solar system animation
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use orrery_core::{AnimationState, SceneRenderer};

pub mod renderer;

pub use renderer::AsciiPipeline;

pub const TITLE: &str = "Solar System Simulation (Manual Matrix Math)";

/// Main application struct driving the animation and traversal callbacks
pub struct TerminalApp {
    scene: SceneRenderer,
    animation: AnimationState,
    pipeline: AsciiPipeline,
    running: bool,
    paused: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene: SceneRenderer::new(),
            animation: AnimationState::new(),
            pipeline: AsciiPipeline::new(width as usize, height as usize),
            running: true,
            paused: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // One animation tick, then one traversal
            if !self.paused {
                self.animation.tick();
            }
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        // Track terminal resizes
        let (width, height) = terminal::size()?;
        self.pipeline.resize(width as usize, height as usize);

        self.pipeline.clear();

        // Seed the traversal from the camera view and walk the body table
        let view = self.pipeline.camera().view_transform();
        self.scene
            .render_frame(&view, &self.animation, &mut self.pipeline);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.pipeline.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} | FPS: {:.1} | Space=Pause Q=Quit",
                TITLE, self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
