//! Command trait, registry, and dispatch resolution.

use std::collections::HashMap;
use std::rc::Rc;

use crate::clock::TimeService;
use crate::screen::Screen;

/// Commands whose bare name falls through to an argument lookup when the
/// first token matches nothing.
const ARG_FALLBACK_COMMANDS: &[&str] = &["cat", "ls"];

/// Everything a command handler may touch.
pub struct Context<'a> {
    pub screen: &'a mut Screen,
    pub registry: &'a CommandRegistry,
    pub clock: &'a dyn TimeService,
}

/// A named terminal command.
///
/// Handlers write their own output, including their own error lines; run
/// itself never fails.
pub trait Command {
    /// Canonical lowercase name.
    fn name(&self) -> &str;

    /// One-line description for the help listing.
    fn description(&self) -> &str;

    /// Hidden commands dispatch normally but are excluded from the help
    /// listing and from tab completion.
    fn hidden(&self) -> bool {
        false
    }

    fn run(&self, args: &[&str], ctx: &mut Context<'_>);
}

struct RegEntry {
    cmd: Rc<dyn Command>,
    is_alias: bool,
}

/// Name-keyed command table preserving registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, RegEntry>,
    order: Vec<String>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its canonical name. Re-registering a name
    /// replaces the previous entry.
    pub fn register(&mut self, cmd: Rc<dyn Command>) {
        let name = cmd.name().to_lowercase();
        log::debug!("registering command: {name}");
        self.insert(name, cmd, false);
    }

    /// Register a command along with alternate names. Aliases dispatch like
    /// the canonical name but never appear in the help listing.
    pub fn register_with_aliases(&mut self, cmd: Rc<dyn Command>, aliases: &[&str]) {
        self.register(Rc::clone(&cmd));
        for alias in aliases {
            self.insert(alias.to_lowercase(), Rc::clone(&cmd), true);
        }
    }

    fn insert(&mut self, key: String, cmd: Rc<dyn Command>, is_alias: bool) {
        if self
            .commands
            .insert(key.clone(), RegEntry { cmd, is_alias })
            .is_none()
        {
            self.order.push(key);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_lowercase())
    }

    /// Resolve raw input to a command and its arguments.
    ///
    /// Tries, in order: the lowercased first token; the whole lowercased
    /// input as a single name; for `cat`/`ls`, the first argument as a
    /// content lookup handled by the command itself.
    pub fn resolve(&self, raw: &str) -> Option<(Rc<dyn Command>, Vec<String>)> {
        let mut parts = raw.split_whitespace();
        let head = parts.next()?.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        if let Some(entry) = self.commands.get(&head) {
            return Some((Rc::clone(&entry.cmd), args));
        }
        let whole = raw.trim().to_lowercase();
        if let Some(entry) = self.commands.get(&whole) {
            return Some((Rc::clone(&entry.cmd), Vec::new()));
        }
        if ARG_FALLBACK_COMMANDS.contains(&head.as_str()) && !args.is_empty() {
            if let Some(entry) = self.commands.get(&head) {
                return Some((Rc::clone(&entry.cmd), args));
            }
        }
        None
    }

    /// Registered names with a given prefix, in registration order. Aliases
    /// and hidden commands complete like any other name.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Visible (name, description) pairs for the help listing, in
    /// registration order.
    pub fn listing(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|name| {
                let entry = self.commands.get(name)?;
                if entry.is_alias || entry.cmd.hidden() {
                    return None;
                }
                Some((name.clone(), entry.cmd.description().to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::line::Style;

    struct Probe {
        name: &'static str,
        hidden: bool,
    }

    impl Command for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "probe"
        }

        fn hidden(&self) -> bool {
            self.hidden
        }

        fn run(&self, args: &[&str], ctx: &mut Context<'_>) {
            ctx.screen
                .write_line(format!("{} {}", self.name, args.join(",")), Style::White);
        }
    }

    fn probe(name: &'static str) -> Rc<dyn Command> {
        Rc::new(Probe {
            name,
            hidden: false,
        })
    }

    fn run_resolved(reg: &CommandRegistry, raw: &str) -> Option<String> {
        let (cmd, args) = reg.resolve(raw)?;
        let mut screen = Screen::new(80, 24);
        let clock = MockClock {
            unix_secs: 0,
            uptime: 0,
        };
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let mut ctx = Context {
            screen: &mut screen,
            registry: reg,
            clock: &clock,
        };
        cmd.run(&arg_refs, &mut ctx);
        Some(crate::markup::strip(&screen.entries()[0].line.text))
    }

    #[test]
    fn resolves_first_token_with_args() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("cat"));
        assert_eq!(
            run_resolved(&reg, "cat about.txt extra").as_deref(),
            Some("cat about.txt,extra")
        );
    }

    #[test]
    fn dispatch_is_case_insensitive() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("help"));
        assert_eq!(run_resolved(&reg, "HeLp").as_deref(), Some("help "));
    }

    #[test]
    fn whole_input_matches_when_first_token_does_not() {
        struct Spaced;
        impl Command for Spaced {
            fn name(&self) -> &str {
                "show all"
            }
            fn description(&self) -> &str {
                "spaced"
            }
            fn run(&self, _args: &[&str], ctx: &mut Context<'_>) {
                ctx.screen.write_line("spaced hit", Style::White);
            }
        }
        let mut reg = CommandRegistry::new();
        reg.register(Rc::new(Spaced));
        assert_eq!(run_resolved(&reg, "SHOW ALL").as_deref(), Some("spaced hit"));
    }

    #[test]
    fn unknown_input_yields_none() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("help"));
        assert!(reg.resolve("frobnicate").is_none());
        assert!(reg.resolve("").is_none());
    }

    #[test]
    fn reregistering_replaces() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("x"));
        reg.register(Rc::new(Probe {
            name: "x",
            hidden: true,
        }));
        assert!(reg.contains("x"));
        assert!(reg.listing().is_empty(), "replacement is hidden");
        assert_eq!(reg.order.len(), 1, "no duplicate order entry");
    }

    #[test]
    fn aliases_dispatch_but_stay_out_of_listing() {
        let mut reg = CommandRegistry::new();
        reg.register_with_aliases(probe("ls"), &["dir", "list"]);
        assert!(reg.resolve("dir").is_some());
        assert!(reg.resolve("list").is_some());
        let listing = reg.listing();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].0, "ls");
    }

    #[test]
    fn completions_filter_prefix_in_order() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("help"));
        reg.register(probe("history"));
        reg.register(probe("hostname"));
        reg.register(probe("cat"));
        assert_eq!(reg.completions("h"), ["help", "history", "hostname"]);
        assert_eq!(reg.completions("his"), ["history"]);
        assert!(reg.completions("z").is_empty());
    }

    #[test]
    fn completions_include_hidden_and_aliases() {
        let mut reg = CommandRegistry::new();
        reg.register(Rc::new(Probe {
            name: "neofetch",
            hidden: true,
        }));
        reg.register_with_aliases(probe("net"), &["network"]);
        assert_eq!(reg.completions("ne"), ["neofetch", "net", "network"]);
    }

    #[test]
    fn listing_preserves_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(probe("whoami"));
        reg.register(probe("cat"));
        reg.register(probe("ls"));
        let names: Vec<String> = reg.listing().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["whoami", "cat", "ls"]);
    }
}
