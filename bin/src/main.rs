use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use wordle_player::*;

/// Plays Wordle against itself: guesses are drawn from the remaining
/// candidates with probability proportional to word popularity.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing the word-list files.
    #[arg(short = 'd', long, default_value = ".")]
    data_dir: PathBuf,

    /// Which word-list generation to use: "new" or "old".
    #[arg(short, long, default_value = "new")]
    variant: String,

    /// Optional file of per-word popularity scores, one "word score" pair per
    /// line. Words not listed get a score of 1.0.
    #[arg(short, long)]
    scores_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single game with the given target word.
    Single { word: String },
    /// Play a single game with a randomly chosen answer.
    Random,
    /// Play every answer once and report the guess distribution.
    Benchmark,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let variant = ListVariant::from_str(&args.variant)?;

    let scores = match &args.scores_file {
        Some(path) => load_scores(path)?,
        None => HashMap::new(),
    };

    let mut words_reader =
        io::BufReader::new(File::open(args.data_dir.join(variant.word_list_file()))?);
    let lexicon = Arc::new(Lexicon::from_reader(&mut words_reader, |word| {
        scores.get(word).copied().unwrap_or(1.0)
    })?);
    let mut answers_reader =
        io::BufReader::new(File::open(args.data_dir.join(variant.answer_list_file()))?);
    let answers = read_word_list(&mut answers_reader)?;
    info!(
        "loaded {} words and {} answers",
        lexicon.len(),
        answers.len()
    );
    println!("There are {} possible words.", lexicon.len());

    let mut rng = rand::thread_rng();
    match args.command {
        Command::Single { word } => {
            play_one(GameSession::new(Arc::clone(&lexicon), &word)?, &mut rng)?
        }
        Command::Random => play_one(
            GameSession::with_random_target(Arc::clone(&lexicon), &answers, &mut rng)?,
            &mut rng,
        )?,
        Command::Benchmark => run_benchmark(&lexicon, &answers, &mut rng)?,
    }

    Ok(())
}

fn play_one(mut session: GameSession, rng: &mut impl Rng) -> Result<(), PlayerError> {
    let solved = session.play(rng)?;
    print_board(&session);
    if solved {
        println!(
            "Solved {} in {} guesses.",
            session.target(),
            session.total_moves()
        );
    } else {
        println!(
            "Couldn't solve {} within {} guesses.",
            session.target(),
            MAX_GUESSES
        );
    }
    Ok(())
}

fn print_board(session: &GameSession) {
    for feedback in session.history() {
        let squares: String = feedback.letters.iter().map(square).collect();
        println!("{} | {}", squares, feedback.guess);
    }
}

fn square(letter: &LetterFeedback) -> char {
    match letter {
        LetterFeedback::Exact => '\u{1F7E9}',
        LetterFeedback::Present => '\u{1F7E8}',
        LetterFeedback::Absent => '\u{2B1C}',
    }
}

fn run_benchmark(
    lexicon: &Arc<Lexicon>,
    answers: &[String],
    rng: &mut impl Rng,
) -> Result<(), Box<dyn Error>> {
    if answers.is_empty() {
        println!("No answers to play.");
        return Ok(());
    }

    let mut moves_per_game: Vec<usize> = Vec::new();
    for answer in answers {
        let mut session = GameSession::new(Arc::clone(lexicon), answer)?;
        session.play(rng)?;
        moves_per_game.push(session.total_moves());
    }

    let mut num_games_per_moves: HashMap<usize, u32> = HashMap::new();
    for moves in moves_per_game.iter() {
        *num_games_per_moves.entry(*moves).or_insert(0) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut all_moves: Vec<usize> = num_games_per_moves.keys().copied().collect();
    all_moves.sort_unstable();
    for moves in all_moves.iter() {
        println!("|{}|{}|", moves, num_games_per_moves[moves]);
    }

    let num_solved = moves_per_game
        .iter()
        .filter(|moves| **moves <= MAX_GUESSES)
        .count();
    let average = moves_per_game.iter().sum::<usize>() as f64 / moves_per_game.len() as f64;
    let std_dev = (moves_per_game
        .iter()
        .map(|moves| (*moves as f64 - average).powi(2))
        .sum::<f64>()
        / moves_per_game.len() as f64)
        .sqrt();

    println!("\nSolved {}/{} answers.", num_solved, moves_per_game.len());
    println!(
        "**Average number of moves:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

/// Reads a scores file with one "word score" pair per line. Blank lines are
/// skipped.
fn load_scores(path: &Path) -> Result<HashMap<String, f64>, Box<dyn Error>> {
    let reader = io::BufReader::new(File::open(path)?);
    let mut scores = HashMap::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let word = parts
            .next()
            .ok_or_else(|| format!("malformed scores line: {}", line))?;
        let score: f64 = parts
            .next()
            .ok_or_else(|| format!("missing score for word {}", word))?
            .parse()?;
        scores.insert(word.to_lowercase(), score);
    }
    Ok(scores)
}
