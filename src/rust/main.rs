use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use naive_sentiment::{
    Classifier, CorpusLabels, DirectoryCorpus, ModelCache, ModelSource, NEGATIVE_FILE_PREFIX,
    POSITIVE_FILE_PREFIX,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory of labeled review files to train on
    #[arg(short, long, default_value = "movie_reviews")]
    training_dir: PathBuf,

    /// Directory holding the cached word counts
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Retrain even if cached word counts exist
    #[arg(short, long)]
    fresh: bool,

    /// File name prefix of positive reviews
    #[arg(long, default_value = POSITIVE_FILE_PREFIX)]
    positive_prefix: String,

    /// File name prefix of negative reviews
    #[arg(long, default_value = NEGATIVE_FILE_PREFIX)]
    negative_prefix: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a piece of text
    Classify {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the smoothed probability of each word under both classes
    Inspect {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Interactive menu (the default)
    Menu,
}

fn setup_classifier(args: &Args) -> anyhow::Result<Classifier> {
    let cache = match &args.cache_dir {
        Some(dir) => ModelCache::new(dir),
        None => ModelCache::new_default(),
    }
    .context("Failed to open the model cache directory")?;

    let corpus = DirectoryCorpus::new(&args.training_dir);
    let labels = CorpusLabels::new(&args.positive_prefix, &args.negative_prefix);

    let start_time = Instant::now();
    let (model, source) = cache
        .load_or_train(&corpus, &labels, args.fresh)
        .with_context(|| format!("Failed to set up the classifier from {:?}", args.training_dir))?;
    match source {
        ModelSource::Cache => info!("Loaded cached word counts (took {:.2?})", start_time.elapsed()),
        ModelSource::Trained => info!("Trained and cached word counts (took {:.2?})", start_time.elapsed()),
    }

    Ok(Classifier::new(model)?)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, request: &str) -> io::Result<String> {
    write!(output, "{}", request)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_probabilities<W: Write>(classifier: &Classifier, word: &str, output: &mut W) -> io::Result<()> {
    let (positive, negative) = classifier.probability_lookup(word);
    // `{:?}` keeps the decimal point on whole numbers ("1.0", not "1")
    writeln!(output, "P('{}' | pos) = {:?}", word, positive)?;
    writeln!(output, "P('{}' | neg) = {:?}", word, negative)
}

fn inspect_probabilities<R: BufRead, W: Write>(
    classifier: &Classifier,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let request = "Give a single word to view probabilities of (or no input to exit):\n";
    loop {
        let word = prompt(input, output, request)?;
        if word.is_empty() {
            break;
        }
        print_probabilities(classifier, &word, output)?;
    }
    writeln!(output, "Exiting the probability viewer")
}

fn test_classifier<R: BufRead, W: Write>(
    classifier: &Classifier,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let request = "Give a sentence to classify (or no input to exit): ";
    loop {
        let sentence = prompt(input, output, request)?;
        if sentence.is_empty() {
            break;
        }
        let result = classifier.classify(&sentence);
        writeln!(output, "The classifier rates your sentence as {}", result)?;
    }
    writeln!(output, "Exiting the classifier")
}

fn run_menu<R: BufRead, W: Write>(classifier: &Classifier, input: &mut R, output: &mut W) -> io::Result<()> {
    let choice = prompt(
        input,
        output,
        "What should we do with our classifier?\n 1 to inspect probabilities\n 2 to classify text\n",
    )?;
    match choice.as_str() {
        "1" => inspect_probabilities(classifier, input, output),
        "2" => test_classifier(classifier, input, output),
        _ => writeln!(output, "Invalid option, quitting"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("=== Starting Sentiment Classifier ===");
    let classifier = setup_classifier(&args)?;
    let classifier_info = classifier.info();
    info!(
        "Positive class: {} words, {} tokens; negative class: {} words, {} tokens",
        classifier_info.positive_vocabulary,
        classifier_info.positive_tokens,
        classifier_info.negative_vocabulary,
        classifier_info.negative_tokens
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match args.command.unwrap_or(Command::Menu) {
        Command::Classify { text } => {
            let text = text.join(" ");
            let (sentiment, scores) = classifier.predict(&text);
            info!("Log scores: positive {:.4}, negative {:.4}", scores.positive, scores.negative);
            writeln!(output, "{}", sentiment)?;
        }
        Command::Inspect { words } => {
            for word in &words {
                print_probabilities(&classifier, word, &mut output)?;
            }
        }
        Command::Menu => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_menu(&classifier, &mut input, &mut output)?;
        }
    }

    Ok(())
}
