//! Built-in command set.
//!
//! Handlers build their output as [`OutputLine`] sequences and hand them to
//! the playback engine; multi-line output animates, single status lines
//! print instantly. Every persona string comes from the [`Profile`].

use std::rc::Rc;

use crate::content::Profile;
use crate::line::{OutputLine, Style};
use crate::markup;
use crate::registry::{Command, CommandRegistry, Context};

/// Minimum surface width for the skills bar chart.
pub const SKILLS_MIN_COLS: u16 = 60;

/// Register the full built-in command set.
pub fn register_builtins(reg: &mut CommandRegistry, profile: &Rc<Profile>) {
    reg.register(Rc::new(Help));
    reg.register(Rc::new(Whoami(Rc::clone(profile))));
    reg.register(Rc::new(Cat(Rc::clone(profile))));
    reg.register(Rc::new(Ls(Rc::clone(profile))));
    reg.register(Rc::new(History(Rc::clone(profile))));
    reg.register(Rc::new(Skills(Rc::clone(profile))));
    reg.register(Rc::new(Contact(Rc::clone(profile))));
    reg.register(Rc::new(Neofetch(Rc::clone(profile))));
    reg.register(Rc::new(Clear));
    reg.register(Rc::new(DateCmd));
    reg.register(Rc::new(Uptime));
    reg.register(Rc::new(Echo));
    reg.register(Rc::new(Pwd(Rc::clone(profile))));
    reg.register(Rc::new(Hostname(Rc::clone(profile))));
    reg.register(Rc::new(Sudo(Rc::clone(profile))));
    reg.register(Rc::new(Rm));
    reg.register(Rc::new(Exit(Rc::clone(profile))));
}

fn pad_to(name: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(name.chars().count()).max(1))
}

struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "List all commands"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let mut lines = vec![
            OutputLine::instant("Available commands:", Style::Heading),
            OutputLine::blank(),
        ];
        for (name, desc) in ctx.registry.listing() {
            let pad = pad_to(&name, 20);
            lines.push(
                OutputLine::new(format!("  <g>{name}</g>{pad}<d>{desc}</d>"), Style::White)
                    .with_delay(40),
            );
        }
        lines.push(OutputLine::blank());
        lines.push(OutputLine::instant(
            "Arrow keys for history, Tab for autocomplete.",
            Style::Dim,
        ));
        ctx.screen.type_lines(lines);
    }
}

struct Whoami(Rc<Profile>);

impl Command for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn description(&self) -> &str {
        "Display bio + focus areas"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let p = &self.0;
        let mut lines = vec![
            OutputLine::instant(format!("<c><b>{}</b></c>", p.full_name), Style::Default),
            OutputLine::new(p.title.clone(), Style::Amber).with_delay(30),
            OutputLine::blank(),
            OutputLine::new(p.bio.short.clone(), Style::White).with_delay(30),
            OutputLine::blank(),
            OutputLine::instant("Focus Areas:", Style::SubHeading),
        ];
        for focus in &p.bio.focus {
            lines.push(OutputLine::new(format!("  > {focus}"), Style::Green).with_delay(40));
        }
        ctx.screen.type_lines(lines);
    }
}

struct Cat(Rc<Profile>);

impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "Read a file (about.txt, <project-id>)"
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
        let joined = args.join(" ");
        let target = joined
            .to_lowercase()
            .strip_suffix(".txt")
            .map(str::to_string)
            .unwrap_or_else(|| joined.to_lowercase());

        if target == "about" {
            let mut lines = vec![OutputLine::instant("--- about.txt ---", Style::Separator)];
            for para in &self.0.bio.about {
                if para.is_empty() {
                    lines.push(OutputLine::blank());
                } else {
                    lines.push(OutputLine::new(para.clone(), Style::White).with_delay(40));
                }
            }
            lines.push(OutputLine::instant("--- EOF ---", Style::Separator));
            ctx.screen.type_lines(lines);
            return;
        }

        if let Some(project) = self.0.projects.iter().find(|p| p.id == target) {
            let stack = project
                .tech
                .iter()
                .map(|t| format!("<c>{t}</c>"))
                .collect::<Vec<_>>()
                .join(" | ");
            ctx.screen.type_lines(vec![
                OutputLine::instant(format!("--- {}.md ---", project.id), Style::Separator),
                OutputLine::instant(format!("# {}", project.name), Style::Heading),
                OutputLine::new(project.tagline.clone(), Style::Amber).with_delay(30),
                OutputLine::blank(),
                OutputLine::new(project.description.clone(), Style::White).with_delay(40),
                OutputLine::blank(),
                OutputLine::new(
                    format!("Status: <g><b>{}</b></g>", project.status),
                    Style::White,
                )
                .with_delay(30),
                OutputLine::new(format!("Stack:  {stack}"), Style::White).with_delay(30),
                OutputLine::instant("--- EOF ---", Style::Separator),
            ]);
            return;
        }

        ctx.screen.write_line(
            format!(
                "cat: {}: No such file or directory",
                markup::escape(&joined)
            ),
            Style::Error,
        );
        ctx.screen.write_line(
            "Try: cat about.txt, or cat &lt;project-id&gt;",
            Style::Dim,
        );
    }
}

struct Ls(Rc<Profile>);

impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> &str {
        "List projects"
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
        let target = args.first().map(|a| a.to_lowercase()).unwrap_or_default();

        if target.is_empty() || target == "projects" {
            let mut lines = vec![
                OutputLine::instant("drwxr-xr-x  projects/", Style::Cyan),
                OutputLine::blank(),
            ];
            for p in &self.0.projects {
                let status = if p.status == "ACTIVE" {
                    format!("<g>[{}]</g>", p.status)
                } else {
                    format!("<a>[{}]</a>", p.status)
                };
                lines.push(
                    OutputLine::new(
                        format!("  {status} <g><b>{}</b></g>  <d>— {}</d>", p.id, p.tagline),
                        Style::White,
                    )
                    .with_delay(50),
                );
            }
            lines.push(OutputLine::blank());
            lines.push(OutputLine::instant(
                "Use <g>cat &lt;project-id&gt;</g> for details.",
                Style::Dim,
            ));
            ctx.screen.type_lines(lines);
            return;
        }

        ctx.screen.write_line(
            format!(
                "ls: cannot access '{}': Not a directory",
                markup::escape(&target)
            ),
            Style::Error,
        );
    }
}

struct History(Rc<Profile>);

impl History {
    fn kind_tag(kind: &str) -> &'static str {
        match kind {
            "milestone" => "c",
            "deploy" => "g",
            "security" => "r",
            "learning" => "a",
            _ => "g",
        }
    }
}

impl Command for History {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "Show journey timeline"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let mut lines = vec![
            OutputLine::instant("Timeline", Style::Heading),
            OutputLine::blank(),
        ];
        for entry in &self.0.timeline {
            let tag = Self::kind_tag(&entry.kind);
            let label = entry.kind.to_uppercase();
            lines.push(
                OutputLine::new(
                    format!(
                        "  <d>{}</d>  <{tag}>[{label}]</{tag}> <w><b>{}</b></w>",
                        entry.date, entry.title
                    ),
                    Style::Default,
                )
                .with_delay(50),
            );
            lines.push(
                OutputLine::new(format!("           <d>{}</d>", entry.desc), Style::Default)
                    .with_delay(30),
            );
            lines.push(OutputLine::blank());
        }
        ctx.screen.type_lines(lines);
    }
}

struct Skills(Rc<Profile>);

impl Command for Skills {
    fn name(&self) -> &str {
        "skills"
    }

    fn description(&self) -> &str {
        "Display skill categories"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        if ctx.screen.cols() < SKILLS_MIN_COLS {
            ctx.screen
                .write_line("skills: not available on this device.", Style::Dim);
            return;
        }
        let mut lines = vec![
            OutputLine::instant("Skills", Style::Heading),
            OutputLine::blank(),
        ];
        for cat in &self.0.skills {
            lines.push(
                OutputLine::new(format!("  {}", cat.category), Style::SubHeading).with_delay(30),
            );
            for skill in &cat.items {
                let filled = "█".repeat(skill.level.min(5) as usize);
                let empty = "░".repeat(5usize.saturating_sub(skill.level as usize));
                let pad = pad_to(&skill.name, 20);
                lines.push(
                    OutputLine::new(
                        format!(
                            "    {}{pad}<g>{filled}</g><d>{empty}</d> {}/5",
                            skill.name, skill.level
                        ),
                        Style::White,
                    )
                    .with_delay(40),
                );
            }
            lines.push(OutputLine::blank());
        }
        ctx.screen.type_lines(lines);
    }
}

struct Contact(Rc<Profile>);

impl Command for Contact {
    fn name(&self) -> &str {
        "contact"
    }

    fn description(&self) -> &str {
        "Show contact links"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let mut lines = vec![
            OutputLine::instant("Contact", Style::Heading),
            OutputLine::blank(),
        ];
        for c in &self.0.contact {
            // In-page anchors show as plain labels; external links render
            // underlined with the note appended.
            let text = if c.url.starts_with('#') {
                let note = if c.note.is_empty() { &c.label } else { &c.note };
                format!("  {} {}: {}", c.icon, c.label, note)
            } else if c.note.is_empty() {
                format!("  {} <u><c>{}</c></u>", c.icon, c.label)
            } else {
                format!("  {} <u><c>{}</c></u> — {}", c.icon, c.label, c.note)
            };
            lines.push(OutputLine::new(text, Style::Link).with_delay(50));
        }
        lines.push(OutputLine::blank());
        ctx.screen.type_lines(lines);
    }
}

struct Neofetch(Rc<Profile>);

impl Command for Neofetch {
    fn name(&self) -> &str {
        "neofetch"
    }

    fn description(&self) -> &str {
        "System info with ASCII art"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let p = &self.0;
        let ascii = &p.neofetch.ascii;
        let info = &p.neofetch.info;
        let art_width = ascii.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = ascii.len().max(info.len() + 2);

        let mut lines = Vec::with_capacity(rows);
        for i in 0..rows {
            let art = ascii.get(i).map(String::as_str).unwrap_or("");
            let art_pad = " ".repeat(art_width + 4 - art.chars().count());
            let info_col = if i == 0 {
                format!("<c><b>{}@{}</b></c>", p.user, p.hostname)
            } else if i == 1 {
                format!("<d>{}</d>", "─".repeat(25))
            } else if let Some(entry) = info.get(i - 2) {
                format!("<c>{}:</c> <w>{}</w>", entry.label, entry.value)
            } else {
                String::new()
            };
            lines.push(
                OutputLine::new(
                    format!("<c>{}{art_pad}</c>{info_col}", markup::escape(art)),
                    Style::Default,
                )
                .with_delay(35),
            );
        }
        ctx.screen.type_lines(lines);
    }
}

struct Clear;

impl Command for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Clear terminal"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        ctx.screen.clear();
    }
}

struct DateCmd;

impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> &str {
        "Show current date"
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let now = ctx.clock.now();
        ctx.screen.write_line(now.to_string(), Style::White);
    }
}

struct Uptime;

impl Command for Uptime {
    fn name(&self) -> &str {
        "uptime"
    }

    fn description(&self) -> &str {
        "Show session uptime"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        let secs = ctx.clock.uptime_secs();
        ctx.screen.write_line(
            format!(
                "up {}m {}s, 1 user, load average: 0.42, 0.31, 0.27",
                secs / 60,
                secs % 60
            ),
            Style::White,
        );
    }
}

struct Echo;

impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Print text"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
        // Args pass through as markup, like any handler-authored line.
        ctx.screen.write_line(args.join(" "), Style::White);
    }
}

struct Pwd(Rc<Profile>);

impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn description(&self) -> &str {
        "Print working directory"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        ctx.screen
            .write_line(format!("/home/{}/portfolio", self.0.user), Style::White);
    }
}

struct Hostname(Rc<Profile>);

impl Command for Hostname {
    fn name(&self) -> &str {
        "hostname"
    }

    fn description(&self) -> &str {
        "Show hostname"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        ctx.screen.write_line(
            format!("{}.{}.local", self.0.hostname, self.0.user),
            Style::White,
        );
    }
}

struct Sudo(Rc<Profile>);

impl Command for Sudo {
    fn name(&self) -> &str {
        "sudo"
    }

    fn description(&self) -> &str {
        "Attempt privilege escalation"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
        if args.is_empty() {
            ctx.screen
                .write_line("usage: sudo &lt;command&gt;", Style::Error);
            return;
        }
        ctx.screen.type_lines(vec![
            OutputLine::new(
                format!("[sudo] password for {}: ********", self.0.user),
                Style::White,
            )
            .with_delay(40),
            OutputLine::instant("Nice try. This incident will be reported.", Style::Red),
        ]);
    }
}

struct Rm;

impl Command for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn description(&self) -> &str {
        "Remove files (blocked)"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
        let target = args.join(" ");
        if target.contains("-rf") || target.contains("-r") {
            ctx.screen.type_lines(vec![
                OutputLine::new(
                    format!("rm: refusing to destroy {}", markup::escape(&target)),
                    Style::Error,
                )
                .with_delay(40),
                OutputLine::instant(
                    "The defense grid does not approve of this action.",
                    Style::Red,
                ),
            ]);
        } else {
            ctx.screen.write_line(
                format!(
                    "rm: cannot remove '{}': Operation not permitted",
                    markup::escape(&target)
                ),
                Style::Error,
            );
        }
    }
}

struct Exit(Rc<Profile>);

impl Command for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "Attempt to exit"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
        ctx.screen.write_line("logout", Style::White);
        ctx.screen.write_line(
            format!("Connection to {}.{}.local closed.", self.0.hostname, self.0.user),
            Style::Dim,
        );
        // The punchline lands after a beat; the pause keeps the gate closed
        // so nothing interleaves.
        ctx.screen.pause(1500);
        ctx.screen.type_lines(vec![OutputLine::instant(
            "...just kidding. You can't leave.",
            Style::Amber,
        )]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::screen::Screen;
    use crate::session::Session;
    use noct_types::InputEvent;

    fn session_with(cols: u16) -> Session {
        let profile = Rc::new(Profile::embedded().unwrap());
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &profile);
        Session::new(
            reg,
            Screen::new(cols, 40),
            Box::new(MockClock {
                unix_secs: 1_769_904_000,
                uptime: 135,
            }),
            &profile.user,
            &profile.hostname,
        )
    }

    fn run(s: &mut Session, input: &str) -> Vec<String> {
        for c in input.chars() {
            s.handle_input(InputEvent::Char(c));
        }
        s.handle_input(InputEvent::Submit);
        let mut guard = 0;
        while s.screen.is_animating() {
            s.tick(60_000);
            guard += 1;
            assert!(guard < 1000, "playback stuck");
        }
        s.screen
            .entries()
            .iter()
            .map(|e| crate::markup::strip(&e.line.text))
            .collect()
    }

    #[test]
    fn help_lists_visible_commands_only() {
        let mut s = session_with(100);
        let out = run(&mut s, "help");
        assert!(out.iter().any(|l| l.contains("whoami")));
        assert!(out.iter().any(|l| l.contains("List projects")));
        assert!(
            !out.iter().any(|l| l.contains("neofetch")),
            "hidden commands stay out of help"
        );
        assert!(!out.iter().any(|l| l.contains("sudo")));
        assert_eq!(out.last().map(String::as_str), Some("Arrow keys for history, Tab for autocomplete."));
    }

    #[test]
    fn help_pads_names_to_a_column() {
        let mut s = session_with(100);
        let out = run(&mut s, "help");
        let row = out
            .iter()
            .find(|l| l.trim_start().starts_with("ls"))
            .unwrap();
        assert!(row.contains("ls                  List projects"));
    }

    #[test]
    fn whoami_shows_identity_and_focus() {
        let mut s = session_with(100);
        let out = run(&mut s, "whoami");
        assert!(out.iter().any(|l| l == "N0CSPOCALYPSE"));
        assert!(out.iter().any(|l| l.starts_with("  > ")));
    }

    #[test]
    fn cat_about_and_txt_suffix_agree() {
        let mut a = session_with(100);
        let mut b = session_with(100);
        let out_a = run(&mut a, "cat about");
        let out_b = run(&mut b, "cat about.txt");
        assert_eq!(out_a[1..], out_b[1..], "echo differs, content must not");
        assert_eq!(out_a[1], "--- about.txt ---");
        assert_eq!(out_a.last().map(String::as_str), Some("--- EOF ---"));
    }

    #[test]
    fn cat_project_id_renders_detail_card() {
        let mut s = session_with(100);
        let out = run(&mut s, "cat netwatch");
        assert_eq!(out[1], "--- netwatch.md ---");
        assert!(out.iter().any(|l| l.starts_with("# ")));
        assert!(out.iter().any(|l| l.starts_with("Status: ")));
        assert!(out.iter().any(|l| l.starts_with("Stack:  ")));
    }

    #[test]
    fn cat_unknown_prints_error_and_hint() {
        let mut s = session_with(100);
        let out = run(&mut s, "cat nosuch");
        assert_eq!(out[1], "cat: nosuch: No such file or directory");
        assert_eq!(out[2], "Try: cat about.txt, or cat <project-id>");
    }

    #[test]
    fn ls_bare_and_ls_projects_agree() {
        let mut a = session_with(100);
        let mut b = session_with(100);
        let out_a = run(&mut a, "ls");
        let out_b = run(&mut b, "ls projects");
        assert_eq!(out_a[1..], out_b[1..]);
        assert_eq!(out_a[1], "drwxr-xr-x  projects/");
        assert!(out_a.iter().any(|l| l.contains("[ACTIVE]")));
    }

    #[test]
    fn ls_other_target_errors() {
        let mut s = session_with(100);
        let out = run(&mut s, "ls /etc");
        assert_eq!(out[1], "ls: cannot access '/etc': Not a directory");
    }

    #[test]
    fn history_command_shows_tagged_timeline() {
        let mut s = session_with(100);
        let out = run(&mut s, "history");
        assert_eq!(out[1], "Timeline");
        assert!(out.iter().any(|l| l.contains("[MILESTONE]")
            || l.contains("[DEPLOY]")
            || l.contains("[SECURITY]")
            || l.contains("[LEARNING]")));
    }

    #[test]
    fn skills_renders_bars_on_wide_surface() {
        let mut s = session_with(100);
        let out = run(&mut s, "skills");
        assert_eq!(out[1], "Skills");
        assert!(out.iter().any(|l| l.contains('█') && l.contains("/5")));
    }

    #[test]
    fn skills_gated_on_narrow_surface() {
        let mut s = session_with(SKILLS_MIN_COLS - 1);
        let out = run(&mut s, "skills");
        assert_eq!(out[1], "skills: not available on this device.");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn contact_lists_every_channel() {
        let mut s = session_with(100);
        let profile = Profile::embedded().unwrap();
        let out = run(&mut s, "contact");
        for c in &profile.contact {
            assert!(out.iter().any(|l| l.contains(&c.label)), "{} missing", c.label);
        }
    }

    #[test]
    fn neofetch_pairs_art_with_info() {
        let mut s = session_with(120);
        let profile = Profile::embedded().unwrap();
        let out = run(&mut s, "neofetch");
        let rows = profile
            .neofetch
            .ascii
            .len()
            .max(profile.neofetch.info.len() + 2);
        assert_eq!(out.len() - 1, rows);
        assert!(out[1].contains(&format!("{}@{}", profile.user, profile.hostname)));
        for entry in &profile.neofetch.info {
            assert!(out.iter().any(|l| l.contains(&entry.label)));
        }
    }

    #[test]
    fn clear_command_empties_scrollback() {
        let mut s = session_with(100);
        run(&mut s, "whoami");
        let out = run(&mut s, "clear");
        assert!(out.is_empty());
    }

    #[test]
    fn date_uses_session_clock() {
        let mut s = session_with(100);
        let out = run(&mut s, "date");
        assert_eq!(out[1], "2026-02-01 00:00:00 UTC");
    }

    #[test]
    fn uptime_formats_minutes_and_seconds() {
        let mut s = session_with(100);
        let out = run(&mut s, "uptime");
        assert_eq!(out[1], "up 2m 15s, 1 user, load average: 0.42, 0.31, 0.27");
    }

    #[test]
    fn echo_renders_args_as_markup() {
        let mut s = session_with(100);
        let out = run(&mut s, "echo hello <g>world</g>");
        assert_eq!(out[1], "hello world", "tags style the text, not print");
        assert!(s.screen.entries()[1].line.text.contains("<g>world</g>"));
    }

    #[test]
    fn pwd_and_hostname_derive_from_profile() {
        let mut s = session_with(100);
        let out = run(&mut s, "pwd");
        assert_eq!(out[1], "/home/n0cs/portfolio");
        let out = run(&mut s, "hostname");
        assert_eq!(out[3], "portfolio.n0cs.local");
    }

    #[test]
    fn sudo_without_args_prints_usage() {
        let mut s = session_with(100);
        let out = run(&mut s, "sudo");
        assert_eq!(out[1], "usage: sudo <command>");
    }

    #[test]
    fn sudo_with_args_gets_reported() {
        let mut s = session_with(100);
        let out = run(&mut s, "sudo rm -rf /");
        assert!(out[1].starts_with("[sudo] password for n0cs:"));
        assert_eq!(out[2], "Nice try. This incident will be reported.");
    }

    #[test]
    fn rm_recursive_is_refused_with_flair() {
        let mut s = session_with(100);
        let out = run(&mut s, "rm -rf /");
        assert_eq!(out[1], "rm: refusing to destroy -rf /");
        assert_eq!(out[2], "The defense grid does not approve of this action.");
    }

    #[test]
    fn rm_plain_is_not_permitted() {
        let mut s = session_with(100);
        let out = run(&mut s, "rm notes.txt");
        assert_eq!(out[1], "rm: cannot remove 'notes.txt': Operation not permitted");
    }

    #[test]
    fn exit_delays_the_punchline() {
        let mut s = session_with(100);
        for c in "exit".chars() {
            s.handle_input(InputEvent::Char(c));
        }
        s.handle_input(InputEvent::Submit);
        assert!(s.screen.is_animating(), "pause keeps the gate closed");
        s.tick(1499);
        let partial: Vec<String> = s
            .screen
            .entries()
            .iter()
            .map(|e| crate::markup::strip(&e.line.text))
            .collect();
        assert_eq!(partial.last().map(String::as_str), Some("Connection to portfolio.n0cs.local closed."));
        s.tick(2);
        let out: Vec<String> = s
            .screen
            .entries()
            .iter()
            .map(|e| crate::markup::strip(&e.line.text))
            .collect();
        assert_eq!(out.last().map(String::as_str), Some("...just kidding. You can't leave."));
        assert!(!s.screen.is_animating());
    }

    #[test]
    fn exit_is_dispatchable_but_hidden() {
        let profile = Rc::new(Profile::embedded().unwrap());
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &profile);
        assert!(reg.resolve("exit").is_some());
        assert!(!reg.listing().iter().any(|(n, _)| n == "exit"));
    }
}
