//! Boot sequence: queued as one playback chain at startup.
//!
//! The whole sequence goes through the playback engine, so the input line
//! stays gated until the final hint renders and any keys mashed during boot
//! queue up and run afterwards.

use unicode_width::UnicodeWidthStr;

use crate::content::Profile;
use crate::line::{OutputLine, Style};
use crate::screen::Screen;

/// Interval of the slow-typed boot phrase.
const PHRASE_CHAR_MS: u64 = 90;

/// Total duration of the ellipsis animation.
const ELLIPSIS_BUDGET_MS: u64 = 3750;

/// Queue the full boot sequence on the screen.
pub fn run_boot(screen: &mut Screen, profile: &Profile) {
    log::info!("boot sequence starting");

    screen.type_lines(vec![OutputLine::instant(
        profile.boot.system_line.clone(),
        Style::Dim,
    )]);
    screen.pause(1200);

    screen.type_lines_with(
        vec![OutputLine::new(profile.boot.phrase.clone(), Style::Intro)],
        crate::screen::DEFAULT_LINE_DELAY_MS,
        PHRASE_CHAR_MS,
    );
    screen.pause(600);
    screen.rewrite_frames(ellipsis_frames(&profile.boot.phrase), Style::Intro);
    screen.pause(400);

    screen.type_lines(vec![OutputLine::blank(), OutputLine::blank()]);

    if banner_fits(&profile.boot.banner, screen.cols()) {
        let rows = profile
            .boot
            .banner
            .iter()
            .map(|row| OutputLine::new(row.clone(), Style::Banner).with_delay(150))
            .collect();
        screen.type_lines(rows);
    } else {
        // Narrow surface: plain text banner, no art wrapping issues.
        screen.type_lines(vec![
            OutputLine::new(profile.full_name.clone(), Style::BannerCompact).with_delay(150),
        ]);
    }
    screen.pause(800);

    screen.type_lines(vec![
        OutputLine::blank(),
        OutputLine::instant(profile.title.clone(), Style::Title),
    ]);
    screen.pause(400);
    screen.type_lines(vec![OutputLine::instant(
        profile.bio.short.clone(),
        Style::Tagline,
    )]);
    screen.pause(600);
    screen.type_lines(vec![
        OutputLine::blank(),
        OutputLine::instant(
            "Type <g><b>help</b></g> to see available commands.",
            Style::HintCentered,
        ),
        OutputLine::blank(),
    ]);
}

/// The dot-cycling frames rewriting the phrase line in place. Three dots
/// appear at 90ms steps, the full ellipsis holds, the bare phrase holds,
/// repeating until the budget runs out, then a single dot sticks.
fn ellipsis_frames(phrase: &str) -> Vec<(String, u64)> {
    let cycle_ms = 3 * PHRASE_CHAR_MS + 400 + 300;
    let mut frames = Vec::new();
    let mut elapsed = 0;
    while elapsed < ELLIPSIS_BUDGET_MS {
        frames.push((format!("{phrase}."), PHRASE_CHAR_MS));
        frames.push((format!("{phrase}.."), PHRASE_CHAR_MS));
        frames.push((format!("{phrase}..."), PHRASE_CHAR_MS + 400));
        frames.push((phrase.to_string(), 300));
        elapsed += cycle_ms;
    }
    frames.push((format!("{phrase}."), 0));
    frames
}

/// The art banner needs its widest row to fit the surface.
fn banner_fits(banner: &[String], cols: u16) -> bool {
    let widest = banner.iter().map(|row| row.width()).max().unwrap_or(0);
    widest <= cols as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;

    fn profile() -> Profile {
        Profile::embedded().unwrap()
    }

    fn finish(screen: &mut Screen) {
        let mut guard = 0;
        while screen.is_animating() {
            screen.tick(60_000);
            guard += 1;
            assert!(guard < 1000, "boot playback stuck");
        }
    }

    fn plain_lines(screen: &Screen) -> Vec<String> {
        screen
            .entries()
            .iter()
            .map(|e| markup::strip(&e.line.text))
            .collect()
    }

    #[test]
    fn boot_gates_input_until_complete() {
        let p = profile();
        let mut screen = Screen::new(140, 40);
        run_boot(&mut screen, &p);
        assert!(screen.is_animating());
        finish(&mut screen);
        assert!(!screen.is_animating());
    }

    #[test]
    fn boot_renders_expected_sequence_on_wide_surface() {
        let p = profile();
        let mut screen = Screen::new(140, 40);
        run_boot(&mut screen, &p);
        finish(&mut screen);
        let out = plain_lines(&screen);
        assert_eq!(out[0], p.boot.system_line);
        assert_eq!(out[1], format!("{}.", p.boot.phrase));
        for (i, row) in p.boot.banner.iter().enumerate() {
            assert_eq!(&out[4 + i], row);
        }
        assert!(out.contains(&p.title));
        assert!(out.contains(&p.bio.short));
        assert!(out
            .iter()
            .any(|l| l == "Type help to see available commands."));
    }

    #[test]
    fn narrow_surface_uses_compact_banner() {
        let p = profile();
        let mut screen = Screen::new(60, 24);
        run_boot(&mut screen, &p);
        finish(&mut screen);
        let out = plain_lines(&screen);
        assert!(out.contains(&p.full_name));
        for row in &p.boot.banner {
            assert!(!out.contains(row), "art banner must not render narrow");
        }
    }

    #[test]
    fn phrase_line_is_rewritten_not_duplicated() {
        let p = profile();
        let mut screen = Screen::new(140, 40);
        run_boot(&mut screen, &p);
        finish(&mut screen);
        let out = plain_lines(&screen);
        let phrase_lines = out
            .iter()
            .filter(|l| l.starts_with(&p.boot.phrase))
            .count();
        assert_eq!(phrase_lines, 1);
    }

    #[test]
    fn ellipsis_frames_cover_budget_and_settle_on_one_dot() {
        let frames = ellipsis_frames("rabbit");
        let total: u64 = frames.iter().map(|(_, hold)| hold).sum();
        assert!(total >= ELLIPSIS_BUDGET_MS);
        assert_eq!(frames.last().map(|(t, _)| t.as_str()), Some("rabbit."));
        assert!(frames.iter().any(|(t, _)| t == "rabbit..."));
    }

    #[test]
    fn banner_fit_uses_widest_row() {
        let banner = vec!["██".to_string(), "██████".to_string()];
        assert!(banner_fits(&banner, 6));
        assert!(!banner_fits(&banner, 5));
    }

    #[test]
    fn commands_mashed_during_boot_run_after() {
        let p = profile();
        let mut screen = Screen::new(140, 40);
        run_boot(&mut screen, &p);
        screen.queue_command("help");
        assert!(screen.is_animating());
        finish(&mut screen);
        assert_eq!(screen.pop_pending().as_deref(), Some("help"));
    }
}
