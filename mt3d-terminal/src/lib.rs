/// Terminal front end for the mt3d demo scenes
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use mt3d_core::camera::WHEEL_NOTCH;
use mt3d_core::{Camera, GeomError};
use nalgebra::Vector3;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

pub mod renderer;
pub mod scene;

pub use renderer::LineRenderer;
pub use scene::{Scene, SceneKind, Shade};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 0.5;
/// Pointer-equivalent units per arrow or pan key press
const KEY_POINTER_STEP: f32 = 20.0;
/// World units per primitive move key press
const NUDGE_STEP: f32 = 0.05;
const RESIZE_STEP: f32 = 0.05;
const KEY_HELP: &str = "Tab=Scene Arrows=Orbit +/-=Zoom HJKL=Pan WASD/RF=Move [ ]=Size Q=Quit";

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("camera transform failed: {0}")]
    Geometry(#[from] GeomError),
}

/// Main application struct for the terminal demos
pub struct TerminalApp {
    scene: Scene,
    camera: Camera,
    renderer: LineRenderer,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(kind: SceneKind) -> Result<Self, TerminalError> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene: Scene::new(kind),
            camera: terminal_camera(width, height),
            renderer: LineRenderer::new(width as usize, height as usize),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<(), TerminalError> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<(), TerminalError> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Drain pending input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            self.scene.update();
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

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) => self.handle_key(code),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.renderer = LineRenderer::new(width as usize, height as usize);
                self.camera.resize(width as u32, height as u32);
                self.camera.aspect *= CELL_ASPECT;
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }
            KeyCode::Tab => {
                let kind = self.scene.kind.next();
                info!(scene = ?kind, "switching scene");
                self.scene = Scene::new(kind);
            }
            // Camera
            KeyCode::Up => self.camera.orbit(0.0, -KEY_POINTER_STEP),
            KeyCode::Down => self.camera.orbit(0.0, KEY_POINTER_STEP),
            KeyCode::Left => self.camera.orbit(-KEY_POINTER_STEP, 0.0),
            KeyCode::Right => self.camera.orbit(KEY_POINTER_STEP, 0.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera.zoom(WHEEL_NOTCH * 4.0),
            KeyCode::Char('-') => self.camera.zoom(-WHEEL_NOTCH * 4.0),
            KeyCode::Char('H') => self.camera.pan(KEY_POINTER_STEP, 0.0),
            KeyCode::Char('L') => self.camera.pan(-KEY_POINTER_STEP, 0.0),
            KeyCode::Char('K') => self.camera.pan(0.0, -KEY_POINTER_STEP),
            KeyCode::Char('J') => self.camera.pan(0.0, KEY_POINTER_STEP),
            // Active primitive
            KeyCode::Char('w') => self.scene.nudge(Vector3::new(0.0, 0.0, NUDGE_STEP)),
            KeyCode::Char('s') => self.scene.nudge(Vector3::new(0.0, 0.0, -NUDGE_STEP)),
            KeyCode::Char('a') => self.scene.nudge(Vector3::new(-NUDGE_STEP, 0.0, 0.0)),
            KeyCode::Char('d') => self.scene.nudge(Vector3::new(NUDGE_STEP, 0.0, 0.0)),
            KeyCode::Char('r') => self.scene.nudge(Vector3::new(0.0, NUDGE_STEP, 0.0)),
            KeyCode::Char('f') => self.scene.nudge(Vector3::new(0.0, -NUDGE_STEP, 0.0)),
            KeyCode::Char('[') => self.scene.resize(-RESIZE_STEP),
            KeyCode::Char(']') => self.scene.resize(RESIZE_STEP),
            _ => {}
        }
    }

    fn render(&mut self) -> Result<(), TerminalError> {
        self.renderer.clear();
        self.renderer.render_lines(&self.scene.lines(), &self.camera)?;

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let status = if self.scene.hit() { "HIT" } else { "-" };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} [{}] | FPS: {:.1} | {}",
                self.scene.kind.title(),
                status,
                self.fps,
                KEY_HELP
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn terminal_camera(width: u16, height: u16) -> Camera {
    let mut camera = Camera::new(width as u32, height as u32);
    camera.aspect *= CELL_ASPECT;
    camera
}
