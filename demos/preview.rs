//! Terminal preview of the splash timing: prints one line per sampled frame,
//! shading letters by opacity and dots by their own cycle.
//!
//! Run with `cargo run --example preview`.

use splashwave::{
    AnimationSession, Coordinator, FrameSnapshot, RenderTarget, SplashConfig, SplashResult,
    Waveform,
};

struct ConsoleTarget;

fn shade(opacity: f64) -> char {
    match opacity {
        o if o >= 0.85 => '█',
        o if o >= 0.6 => '▓',
        o if o >= 0.35 => '▒',
        _ => '░',
    }
}

impl RenderTarget for ConsoleTarget {
    fn set_waveform(&mut self, waveform: &Waveform) -> SplashResult<()> {
        println!(
            "waveform: {} segments over {:.0} units",
            waveform.path.elements().len() - 1,
            waveform.total_length
        );
        Ok(())
    }

    fn present(&mut self, frame: &FrameSnapshot) -> SplashResult<()> {
        let letters: String = frame
            .letters
            .iter()
            .map(|l| if l.opacity >= 0.6 { l.character } else { '·' })
            .collect();
        let dots: String = frame.dots.iter().map(|&d| shade(d)).collect();
        println!(
            "t={:5.2}s  [{letters}]  dots {dots}  wave {:+.2}",
            frame.elapsed, frame.wave_offset
        );
        Ok(())
    }
}

fn main() -> SplashResult<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut session = AnimationSession::new(SplashConfig::default())?;
    let mut target = ConsoleTarget;
    Coordinator::start(&mut session, Some(&mut target))?;

    // One and a half letter cycles at 10 fps.
    for step in 1..=90 {
        Coordinator::tick(&session, &mut target, f64::from(step) * 0.1)?;
    }

    Coordinator::stop(&mut session, Some(&mut target))?;
    println!("{}", session.status);
    Ok(())
}
