use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use parse_display::{Display, FromStr};
use recser::{io, Record};
use tracing::info;

#[derive(Parser)]
struct App {
    kind: Kind,

    /// Integer field of the record to write
    #[clap(long, default_value_t = 123, allow_hyphen_values = true)]
    int: i32,

    /// Text field of the record to write
    #[clap(long, default_value = "Hello, World")]
    text: String,

    /// File to write to or read from (required for `write` and `read`)
    #[clap(long)]
    path: Option<PathBuf>,
}

#[derive(Display, FromStr, PartialEq, Debug)]
#[display(style = "snake_case")]
enum Kind {
    RoundTrip,
    Write,
    Read,
}

#[tokio::main]
async fn main() -> Result<(), color_eyre::Report> {
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let app = App::parse();
    let record = Record::new(app.int, app.text.clone());
    match app.kind {
        Kind::RoundTrip => run_round_trip(record).await,
        Kind::Write => io::save(required_path(&app)?, &record).await.map_err(Into::into),
        Kind::Read => {
            let result = io::load(required_path(&app)?).await?;
            print_record(&result);
            Ok(())
        }
    }
}

async fn run_round_trip(orig: Record) -> Result<(), color_eyre::Report> {
    // removed when `tmp_file` drops at the end of this function
    let tmp_file = tempfile::Builder::new()
        .prefix("example")
        .suffix(".ser")
        .tempfile()?;
    info!(path = %tmp_file.path().display(), %orig, "Writing record");

    io::save(tmp_file.path(), &orig).await?;
    let result = io::load(tmp_file.path()).await?;
    print_record(&result);

    if result != orig {
        return Err(eyre!("round trip changed the record: {orig} became {result}"));
    }
    Ok(())
}

fn required_path(app: &App) -> Result<&PathBuf, color_eyre::Report> {
    app.path
        .as_ref()
        .ok_or_else(|| eyre!("--path is required for `{}`", app.kind))
}

fn print_record(record: &Record) {
    println!("result.int_value = {}", record.int_value());
    println!("result.text_value = {}", record.text_value());
}
