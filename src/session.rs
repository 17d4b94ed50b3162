//! Interactive desk session: a menu-driven read-eval loop over a [`Library`].

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use crate::{circulation::CirculationEvent, error::CirculationError, library::Library};

/// Horizontal rule used by the closing banner
const RULE: &str = "═══════════════════════════════════";

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show every item
    List,
    /// Borrow an item by id
    Borrow,
    /// Return an item by id
    Return,
    /// Leave the session
    Exit,
}

impl Command {
    /// Parse a trimmed menu choice; only the exact strings "1" to "4" match
    #[must_use]
    pub fn parse(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::List),
            "2" => Some(Self::Borrow),
            "3" => Some(Self::Return),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the next command
    #[default]
    Running,
    /// Exit was chosen or input ran out
    Terminated,
}

/// One interactive session.
///
/// Dropping the session prints the closing banner and releases the input,
/// whichever way the loop ended.
pub struct Session<'lib, R: BufRead, W: Write, E: Write> {
    /// Catalog and error log the commands act on
    library: &'lib mut Library,
    /// Line-oriented command source
    input: R,
    /// Menus, listings and confirmations
    output: W,
    /// Failure notices
    errors: E,
    /// Current loop state
    state: LoopState,
}

impl<R: BufRead, W: Write, E: Write> fmt::Debug for Session<'_, R, W, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("library", &self.library)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'lib, R: BufRead, W: Write, E: Write> Session<'lib, R, W, E> {
    /// Start a session in the `Running` state
    pub fn new(library: &'lib mut Library, input: R, output: W, errors: E) -> Self {
        Self { library, input, output, errors, state: LoopState::Running }
    }

    /// Current loop state
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Greet the user and process commands until exit or end of input
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console cannot be read or written. The
    /// closing banner is still printed.
    pub fn run(mut self) -> io::Result<()> {
        self.welcome()?;
        while self.state == LoopState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Render the menu, read one choice and dispatch it
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the console cannot be read or written.
    pub fn step(&mut self) -> io::Result<()> {
        self.render_menu()?;
        let Some(choice) = self.read_line()? else {
            return Ok(());
        };

        match Command::parse(&choice) {
            Some(Command::List) => self.list_items(),
            Some(Command::Borrow) => self.circulate(CirculationEvent::Borrow),
            Some(Command::Return) => self.circulate(CirculationEvent::Return),
            Some(Command::Exit) => {
                self.state = LoopState::Terminated;
                writeln!(self.output, "\nThank you for using the Library Management System!")
            }
            None => {
                tracing::debug!(%choice, "unrecognised menu choice");
                writeln!(self.output, "✗ Invalid choice. Please try again.")
            }
        }
    }

    /// Print the welcome banner
    fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "╔════════════════════════════════════╗")?;
        writeln!(self.output, "║  WELCOME TO LIBRARY SYSTEM         ║")?;
        writeln!(self.output, "╚════════════════════════════════════╝")
    }

    /// Print the menu and the choice prompt
    fn render_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n╔════════════════════════════════════╗")?;
        writeln!(self.output, "║   LIBRARY MANAGEMENT SYSTEM        ║")?;
        writeln!(self.output, "╚════════════════════════════════════╝")?;
        writeln!(self.output, "1. Display all items")?;
        writeln!(self.output, "2. Borrow an item")?;
        writeln!(self.output, "3. Return an item")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "\nEnter your choice: ")?;
        self.output.flush()
    }

    /// Read one trimmed line; end of input terminates the session
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            tracing::info!("input closed, ending session");
            self.state = LoopState::Terminated;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show every item in registry order
    fn list_items(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== LIBRARY INVENTORY ===")?;
        for item in self.library.registry.all() {
            writeln!(self.output, "{item}\n")?;
        }
        Ok(())
    }

    /// Prompt for an id and apply `event` to it
    fn circulate(&mut self, event: CirculationEvent) -> io::Result<()> {
        write!(self.output, "\nEnter item ID to {event}: ")?;
        self.output.flush()?;
        let Some(id) = self.read_line()? else {
            return Ok(());
        };

        let outcome = self.library.circulate(&id, event).map(|item| item.title.clone());
        match outcome {
            Ok(title) => {
                writeln!(self.output, "Successfully {}: {title}", event.past_tense())?;
                writeln!(self.output, "✓ Operation completed successfully!")
            }
            Err(error) => self.fail(&error),
        }
    }

    /// Record a failure in the error log, then tell the user.
    ///
    /// A broken error stream is traced and never ends the session.
    fn fail(&mut self, error: &CirculationError) -> io::Result<()> {
        match error {
            CirculationError::InvalidItem { id } => {
                tracing::warn!(%id, "lookup failed");
            }
            CirculationError::ItemUnavailable { id, reason, .. } => {
                tracing::warn!(%id, ?reason, "circulation refused");
            }
        }
        self.library.report(error);
        if let Err(e) = writeln!(self.errors, "✗ Error: {}", error.report()) {
            tracing::warn!(error = %e, "failed to print failure notice");
        }
        Ok(())
    }

    /// Print the closing banner
    fn close(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "Session closed")?;
        writeln!(self.output, "{RULE}")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write, E: Write> Drop for Session<'_, R, W, E> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to print closing banner");
        }
    }
}
