use chula_lunisolar::MonthStyle;
use clap::{Args, Parser, Subcommand};

/// Thai lunisolar (Chulasakarat) and fortnight-count calendar converter.
#[derive(Parser)]
#[command(
    name = "chula",
    version,
    about = "Thai lunisolar calendar converter"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Regional month numbering: sukhothai, keng-tung or chiang-mai.
    #[arg(long, global = true, default_value_t = MonthStyle::Sukhothai)]
    pub month_style: MonthStyle,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Today's lunisolar date.
    Today,
    /// Convert a Julian Day Number.
    FromJd {
        /// Julian Day Number.
        #[arg(allow_hyphen_values = true)]
        jdn: i64,
    },
    /// Convert a proleptic Gregorian date (YYYY-MM-DD).
    FromSolar {
        /// Solar date, e.g. 2000-01-01.
        date: String,
    },
    /// Convert a lunisolar date to its solar date.
    ToSolar {
        /// Thai long form, or numeric YYYY-MM-DD (month 1..=12, 88 intercalary).
        date: String,
    },
    /// Epoch counters and classification of one year.
    Year {
        /// Chulasakarat year.
        #[arg(allow_hyphen_values = true)]
        year: i64,
    },
    /// Today's Pakkhakhananaa date and board.
    PakToday,
    /// Pakkhakhananaa date and board for a Julian Day or a Pak code.
    Pak(PakArgs),
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct PakArgs {
    /// Julian Day Number.
    #[arg(long)]
    pub jd: Option<i64>,

    /// Pak code, e.g. 1-7:5:6:2:3:4.
    #[arg(long)]
    pub code: Option<String>,
}
