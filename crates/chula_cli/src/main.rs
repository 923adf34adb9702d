mod cli;
mod error;
mod logging;

use std::process;

use chula_base::SolarDate;
use chula_lunisolar::{CalendarConfig, CsDate, ResolvedYear, YearEpoch, parse_thai, parse_ymd};
use chula_pak::PakDate;
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command, PakArgs};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = CalendarConfig::new(cli.month_style);
    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command, config: &CalendarConfig) -> Result<(), CliError> {
    match command {
        Command::Today => print_date(&CsDate::today()?, config),
        Command::FromJd { jdn } => print_date(&CsDate::from_julian_day(jdn)?, config),
        Command::FromSolar { date } => {
            let solar: SolarDate = date.parse()?;
            print_date(&CsDate::from_solar(&solar)?, config);
        }
        Command::ToSolar { date } => {
            let cs = parse_date(&date, config)?;
            info!(horakhun = cs.horakhun(), "parsed {date}");
            println!("{}", cs.to_solar());
        }
        Command::Year { year } => print_year(year)?,
        Command::PakToday => print_pak(&PakDate::today()?),
        Command::Pak(args) => print_pak(&pak_from_args(args)?),
    }
    Ok(())
}

fn parse_date(s: &str, config: &CalendarConfig) -> Result<CsDate, CliError> {
    let date = if s.contains("จ.ศ.") {
        parse_thai(s, config)?
    } else {
        parse_ymd(s)?
    };
    Ok(date)
}

fn print_date(date: &CsDate, config: &CalendarConfig) {
    println!("{}", date.format_with(config));
    println!(
        "CS {}  month {} ({})  day {}",
        date.year(),
        date.month_raw(),
        config.month_style.label(date.lunar_month()),
        date.day()
    );
    println!(
        "Solar {} ({})  JD {}",
        date.to_solar(),
        date.day_of_week().name(),
        date.to_julian_day()
    );
    println!(
        "Horakhun {}  kamma {}  ucca {}  avoman {}  masaken {}  tithi {}",
        date.horakhun(),
        date.kammabucapon(),
        date.uccapon(),
        date.avoman(),
        date.masaken(),
        date.tithi()
    );
    println!(
        "Year type {}  day {} of {}  {} ({})",
        date.year_type(),
        date.day_of_year() + 1,
        date.days_in_year(),
        date.naksatr().year_label(),
        date.naksatr().animal()
    );
}

fn print_year(year: i64) -> Result<(), CliError> {
    // The date constructor validates the year range; the epoch itself does not.
    CsDate::from_year_and_day_offset(year, 0)?;
    let epoch = YearEpoch::new(year);
    let resolved = ResolvedYear::for_year(year);
    println!("{year}: {epoch}");
    println!(
        "Resolved type {} ({} days)  solar days {}",
        resolved.year_type(),
        resolved.caldays(),
        resolved.solar_days()
    );
    println!(
        "New year: month {} day {}  (offset {}, {} days after the solar year start)",
        resolved.new_year_month(),
        resolved.new_year_day(),
        resolved.offset(),
        resolved.offset_days()
    );
    Ok(())
}

fn pak_from_args(args: PakArgs) -> Result<PakDate, CliError> {
    // clap requires exactly one of the two
    let date = match args.jd {
        Some(jdn) => PakDate::from_julian_day(jdn)?,
        None => PakDate::from_code(&args.code.unwrap_or_default())?,
    };
    Ok(date)
}

fn print_pak(date: &PakDate) {
    println!("{date}");
    println!(
        "{}  {}  JD {}  solar {}",
        date.code(),
        date.abbreviation(),
        date.to_julian_day(),
        date.to_solar()
    );
    print!("{}", date.board());
}
