// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! coursepick - course catalog search from the terminal.
//!
//! Thin shell over the library: parse flags into a query, load the catalog
//! snapshot, run the query through a search worker, and render the response
//! as a table (or JSON for pipelines).

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coursepick::types::{Course, Level, SearchResponse, Term};
use coursepick::{Catalog, SearchWorker};

mod cli;
use cli::display::{
    coverage_colored, hours_value, level_label, mark_to_ansi, pad_left, pad_right, rating_value,
    row, score_value, section_bot, section_mid, section_top, styled, term_badge, terms_cell,
    truncate_text, truncate_visible, units_cell, DIM,
};
use cli::{Cli, Commands, InspectArgs, SearchArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Search(args) => run_search(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,coursepick=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_search(args: &SearchArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("loading catalog snapshot {}", args.catalog))?;
    info!(
        courses = catalog.len(),
        last_updated = catalog.last_updated(),
        "catalog loaded"
    );

    let query = args.to_query();
    let scored = query.has_keywords();

    let worker = SearchWorker::spawn(catalog).context("starting search worker")?;
    let response = worker.client().search(query).context("running search")?;
    worker.shutdown();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }
    render_results(&response, args.limit, scored);
    Ok(())
}

fn render_results(response: &SearchResponse, limit: usize, scored: bool) {
    section_top("RESULTS");

    let mut header = format!(
        " {} {} {} {} {} {} {}",
        pad_right("NUMBER", 10),
        pad_right("TITLE", 40),
        pad_right("TERMS", 11),
        "L",
        pad_left("UNITS", 7),
        pad_left("RATE", 4),
        pad_left("HOURS", 6),
    );
    if scored {
        header.push_str(&format!(" {}", pad_left("SCORE", 7)));
    }
    row(&styled(&[DIM], &header));

    for result in response.results.iter().take(limit) {
        let number = mark_to_ansi(&result.highlights.id);
        let title = truncate_visible(&mark_to_ansi(&result.highlights.title), 40);
        let mut line = format!(
            " {} {} {} {} {} {} {}",
            pad_right(&number, 10),
            pad_right(&title, 40),
            pad_right(&terms_cell(&result.course.terms), 11),
            level_label(result.course.level),
            pad_left(&units_cell(result.course.units), 7),
            pad_left(&rating_value(result.course.rating), 4),
            pad_left(&hours_value(result.course.hours), 6),
        );
        if scored {
            line.push_str(&format!(" {}", score_value(result.score)));
        }
        row(&line);
    }

    if response.results.is_empty() {
        row(" no matching courses");
    }

    let shown = response.results.len().min(limit);
    section_mid("SUMMARY");
    row(&format!(
        " {} of {} matching courses shown · catalog updated {}",
        shown,
        response.results.len(),
        response.last_updated
    ));
    section_bot();
}

fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("loading catalog snapshot {}", args.catalog))?;

    let courses = catalog.courses();
    let total = catalog.len();
    let count = |pred: fn(&Course) -> bool| courses.iter().filter(|course| pred(course)).count();

    section_top("CATALOG");
    row(&format!(" file           {}", truncate_text(&args.catalog, 70)));
    row(&format!(" courses        {}", total));
    row(&format!(" last updated   {}", catalog.last_updated()));

    section_mid("TERMS");
    for term in [Term::Fall, Term::January, Term::Spring, Term::Summer] {
        let offered = courses
            .iter()
            .filter(|course| course.terms.contains(&term))
            .count();
        row(&format!(
            " {}             {}",
            term_badge(term),
            coverage_colored(offered, total)
        ));
    }

    section_mid("COVERAGE");
    let undergraduate = courses
        .iter()
        .filter(|course| course.level == Some(Level::Undergraduate))
        .count();
    let graduate = courses
        .iter()
        .filter(|course| course.level == Some(Level::Graduate))
        .count();
    row(&format!(
        " undergraduate  {}",
        coverage_colored(undergraduate, total)
    ));
    row(&format!(
        " graduate       {}",
        coverage_colored(graduate, total)
    ));
    row(&format!(
        " evaluated      {}",
        coverage_colored(count(Course::has_evaluation), total)
    ));
    row(&format!(
        " no prereq      {}",
        coverage_colored(count(|course| !course.has_prereq()), total)
    ));
    row(&format!(
        " half term      {}",
        coverage_colored(count(|course| course.half_term), total)
    ));
    row(&format!(
        " final exam     {}",
        coverage_colored(count(|course| course.final_exam), total)
    ));
    section_bot();

    Ok(())
}
