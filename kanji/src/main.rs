use std::path::PathBuf;

use argh::FromArgs;
use miette::WrapErr;
use tracing::{debug, instrument};

use kanji::output::{PhraseFormatter, RecordFormatter};
use kanji::{Config, Error, http, telemetry};

/// Look up kanji and Japanese words on jisho.org.
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to a TOML config file (default: kanji.toml if present)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
    /// print results as JSON
    #[argh(switch)]
    json: bool,
    #[argh(subcommand)]
    command: Subcommand,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Lookup(LookupArgs),
    Phrase(PhraseArgs),
}

/// Look up a single kanji.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "lookup")]
struct LookupArgs {
    /// the kanji to look up
    #[argh(positional)]
    kanji: String,
}

/// Search for words matching a phrase.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "phrase")]
struct PhraseArgs {
    /// the phrase to search for
    #[argh(positional)]
    keyword: String,
}

#[instrument(skip(client))]
async fn lookup(client: &jisho::Client, kanji: &str, json: bool) -> Result<(), Error> {
    let record = client.search_for_kanji(kanji).await?;

    debug!(found = record.found, "looked up kanji");

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", RecordFormatter(&record));

        if record.found {
            let url = jisho::uri_for_kanji_search(client.search_url(), kanji)?;
            println!("More: {url}");
        }
    }

    Ok(())
}

#[instrument(skip(client))]
async fn phrase(client: &jisho::Client, keyword: &str, json: bool) -> Result<(), Error> {
    let results = client.search_for_phrase(keyword).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", PhraseFormatter(&results));

        let url = jisho::uri_for_example_search(client.search_url(), keyword)?;
        println!("Example sentences: {url}");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    let config = Config::load(opts.config.as_deref())?;
    let _guard = telemetry::try_init(&config.tracing)?;

    let client = http::build_jisho_client(&config.http)?;

    match opts.command {
        Subcommand::Lookup(args) => lookup(&client, &args.kanji, opts.json)
            .await
            .wrap_err_with(|| format!("looking up {}", args.kanji)),
        Subcommand::Phrase(args) => phrase(&client, &args.keyword, opts.json)
            .await
            .wrap_err_with(|| format!("searching for {}", args.keyword)),
    }
}
