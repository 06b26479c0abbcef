use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use sapper_core::{CellCount, Command, CommandKind, GameConfig, GameSession, Outcome, Renderer};

pub(crate) const MINE_COUNT_PROMPT: &str = "How many mines do you want on the field?";
pub(crate) const TURN_PROMPT: &str = "Set/unset mines marks or claim a cell as free: ";
pub(crate) const TURN_HELP: &str =
    "Each turn is `row column command`, both counted from 1, e.g. `3 7 free` or `3 7 mine`";
pub(crate) const LOST_MESSAGE: &str = "You stepped on a mine and failed!";
pub(crate) const WON_MESSAGE: &str = "Congratulations! You found all the mines!";

/// Asks for the mine count unless given, then plays until the game ends or input runs out.
pub(crate) fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    mines: Option<CellCount>,
    seed: u64,
) -> Result<Outcome> {
    let mines = match mines {
        Some(mines) => mines,
        None => {
            writeln!(output, "{MINE_COUNT_PROMPT}")?;
            let line = read_line(&mut input)?.context("No mine count given")?;
            let line = line.trim();
            line.parse::<CellCount>()
                .with_context(|| format!("Invalid mine count {line:?}"))?
        }
    };
    let config = GameConfig::new(mines)?;
    log::info!("Starting a game with {mines} mines");

    play(GameSession::new(config, seed), input, output)
}

/// Feeds one command per line to `session` and prints the grid after each.
pub(crate) fn play<R: BufRead, W: Write>(
    mut session: GameSession,
    mut input: R,
    mut output: W,
) -> Result<Outcome> {
    let renderer = Renderer::new();
    write!(output, "{}", renderer.render(&session))?;
    writeln!(output, "{TURN_HELP}")?;

    while !session.is_finished() {
        writeln!(output, "{TURN_PROMPT}")?;
        let Some(line) = read_line(&mut input)? else {
            log::info!("Input closed before the game ended");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_turn(&line)
            .and_then(|command| session.apply(command).map_err(anyhow::Error::from));
        if let Err(err) = result {
            log::debug!("Rejected turn {:?}: {err:#}", line.trim());
            writeln!(output, "{err:#}")?;
        }

        write!(output, "{}", renderer.render(&session))?;
        writeln!(output)?;
    }

    match session.outcome() {
        Outcome::Lost => writeln!(output, "{LOST_MESSAGE}")?,
        Outcome::Won => writeln!(output, "{WON_MESSAGE}")?,
        Outcome::Playing => {}
    }
    output.flush()?;
    Ok(session.outcome())
}

/// Parses `row column command`, with 1-indexed row and column.
fn parse_turn(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[row, column, kind] = tokens.as_slice() else {
        bail!("Expected `row column command`, got {:?}", line.trim());
    };

    let row: u32 = row.parse().with_context(|| format!("Invalid row {row:?}"))?;
    let column: u32 = column
        .parse()
        .with_context(|| format!("Invalid column {column:?}"))?;
    let kind: CommandKind = kind.parse()?;
    Ok(Command::from_one_based(row, column, kind)?)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;
    Ok((read > 0).then_some(line))
}
