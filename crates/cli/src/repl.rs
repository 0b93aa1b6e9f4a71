//! Interactive console over a loaded snapshot.
//!
//! With a real TTY the console runs in raw mode: line editing, history,
//! and Tab completion. When stdin is piped it degrades to a plain
//! line-at-a-time reader so scripted use still works.

use std::io::{self, stdout, BufRead, Write};

use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyModifiers},
    style::Print,
    terminal::{self, Clear, ClearType},
    QueueableCommand,
};

use dbgkit_cli::editor::LineEditor;
use dbgkit_cli::output::StdoutSink;
use dbgkit_cli::settings::Settings;
use dbgkit_cli::util;
use dbgkit_commands::{CommandRegistry, Completion};
use dbgkit_snapshot::ProcessSnapshot;

/// Words the console handles itself, before dispatch.
const CONSOLE_BUILTINS: &[&str] = &["help", "quit", "exit"];

pub fn run(
    registry: &CommandRegistry,
    snapshot: &ProcessSnapshot,
    settings: &Settings,
) -> io::Result<()> {
    if !atty::is(atty::Stream::Stdin) {
        return run_piped(registry, snapshot);
    }
    banner(snapshot);
    run_interactive(registry, snapshot, settings)
}

fn banner(snapshot: &ProcessSnapshot) {
    match snapshot.program.as_deref() {
        Some(program) => println!(
            "dbgkit {}: inspecting {} ({} variables)",
            env!("CARGO_PKG_VERSION"),
            program,
            snapshot.variables.len()
        ),
        None => println!(
            "dbgkit {} ({} variables)",
            env!("CARGO_PKG_VERSION"),
            snapshot.variables.len()
        ),
    }
    println!("Type \"help\" for commands, Tab to complete, Ctrl-D to quit.");
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit")
}

fn print_help(registry: &CommandRegistry) {
    for command in registry.iter() {
        println!(
            "  {} {} {}",
            util::pad_right(command.name(), 8),
            util::pad_right(command.category().name(), 6),
            command.summary()
        );
    }
    println!("  console words: help, quit, exit");
}

/// Execute one console line. Returns false when the console should exit.
fn execute_line(registry: &CommandRegistry, snapshot: &ProcessSnapshot, line: &str) -> bool {
    if is_quit(line) {
        return false;
    }
    if line.trim() == "help" {
        print_help(registry);
        return true;
    }
    let mut sink = StdoutSink;
    if let Err(err) = registry.dispatch(snapshot, &mut sink, line) {
        println!("{}", err);
    }
    true
}

// ============================================================================
// Piped mode
// ============================================================================

fn run_piped(registry: &CommandRegistry, snapshot: &ProcessSnapshot) -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !execute_line(registry, snapshot, &line) {
            break;
        }
    }
    Ok(())
}

// ============================================================================
// Interactive mode
// ============================================================================

fn run_interactive(
    registry: &CommandRegistry,
    snapshot: &ProcessSnapshot,
    settings: &Settings,
) -> io::Result<()> {
    let mut editor = LineEditor::new(settings.history_limit);

    terminal::enable_raw_mode()?;

    struct Cleanup;
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = terminal::disable_raw_mode();
        }
    }
    let _cleanup = Cleanup;

    let mut out = stdout();
    draw_line(&mut out, &settings.prompt, &editor)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                out.queue(Print("^C\r\n"))?.flush()?;
                editor.set_input("");
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                if editor.is_empty() {
                    out.queue(Print("\r\n"))?.flush()?;
                    return Ok(());
                }
                editor.delete();
            }
            (KeyCode::Char(c), mods)
                if mods.is_empty() || mods == KeyModifiers::SHIFT =>
            {
                editor.insert(&c.to_string());
            }
            (KeyCode::Enter, _) => {
                out.queue(Print("\r\n"))?.flush()?;
                let line = editor.consume_input();
                terminal::disable_raw_mode()?;
                let keep_going = execute_line(registry, snapshot, &line);
                terminal::enable_raw_mode()?;
                if !keep_going {
                    return Ok(());
                }
            }
            (KeyCode::Backspace, _) => editor.backspace(),
            (KeyCode::Delete, _) => editor.delete(),
            (KeyCode::Left, _) => editor.cursor_left(),
            (KeyCode::Right, _) => editor.cursor_right(),
            (KeyCode::Home, _) => editor.cursor_home(),
            (KeyCode::End, _) => editor.cursor_end(),
            (KeyCode::Up, _) => editor.history_prev(),
            (KeyCode::Down, _) => editor.history_next(),
            (KeyCode::Tab, _) => {
                // Completion applies at the end of the line only.
                if editor.cursor() == editor.input().len() {
                    if let Some(candidates) =
                        apply_completion(registry, snapshot, &mut editor)
                    {
                        out.queue(Print("\r\n"))?.flush()?;
                        terminal::disable_raw_mode()?;
                        print_candidates(&candidates);
                        terminal::enable_raw_mode()?;
                    }
                }
            }
            _ => {}
        }

        draw_line(&mut out, &settings.prompt, &editor)?;
    }
}

/// Redraw the prompt line and park the cursor at the editor position.
fn draw_line(out: &mut impl Write, prompt: &str, editor: &LineEditor) -> io::Result<()> {
    let col =
        util::display_width(prompt) + util::display_width(&editor.input()[..editor.cursor()]);
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(prompt))?
        .queue(Print(editor.input()))?
        .queue(MoveToColumn(col as u16))?;
    out.flush()
}

/// The token being completed: everything after the last whitespace.
fn current_token(buffer: &str) -> &str {
    match buffer.rfind(char::is_whitespace) {
        Some(idx) => {
            let ws_len = buffer[idx..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
            &buffer[idx + ws_len..]
        }
        None => buffer,
    }
}

fn replace_current_token(editor: &mut LineEditor, replacement: &str) {
    let buffer = editor.input();
    let keep = buffer.len() - current_token(buffer).len();
    let mut next = buffer[..keep].to_string();
    next.push_str(replacement);
    editor.set_input(next);
}

/// Narrow the token at the end of the buffer. A unique candidate is
/// inserted outright; a shared prefix is extended; otherwise the
/// candidate list comes back for the caller to display.
fn apply_completion(
    registry: &CommandRegistry,
    snapshot: &ProcessSnapshot,
    editor: &mut LineEditor,
) -> Option<Vec<String>> {
    let buffer = editor.input().to_string();
    let token = current_token(&buffer).to_string();

    let mut candidates: Vec<String> = match registry.complete_line(snapshot, &buffer) {
        Completion::Symbols => snapshot
            .variable_names()
            .into_iter()
            .filter(|name| name.starts_with(&token))
            .collect(),
        Completion::Candidates(candidates) => candidates,
    };

    // In first-word position the console's own words complete too.
    if buffer.trim_start().split_once(char::is_whitespace).is_none() {
        let prefix = buffer.trim_start();
        candidates.extend(
            CONSOLE_BUILTINS
                .iter()
                .filter(|word| word.starts_with(prefix))
                .map(|word| word.to_string()),
        );
    }
    candidates.sort();
    candidates.dedup();

    match candidates.as_slice() {
        [] => None,
        [only] => {
            replace_current_token(editor, &format!("{} ", only));
            None
        }
        _ => {
            let shared = util::common_prefix(&candidates);
            if shared.len() > token.len() {
                replace_current_token(editor, &shared);
                None
            } else {
                Some(candidates)
            }
        }
    }
}

fn print_candidates(candidates: &[String]) {
    let width = candidates
        .iter()
        .map(|c| util::display_width(c))
        .max()
        .unwrap_or(0)
        + 2;
    let per_row = (80 / width.max(1)).max(1);
    for chunk in candidates.chunks(per_row) {
        let row: String = chunk.iter().map(|c| util::pad_right(c, width)).collect();
        println!("{}", row.trim_end());
    }
}
