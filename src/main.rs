use log::debug;
use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    path::Path,
    process,
    time::Instant,
};

mod error;
mod records;
mod report;
mod sales;

use error::SalesError;
use records::{read_json, Product, SaleRecord};
use report::{Report, DEFAULT_LABEL};
use sales::{calculate_total_sales, create_price_catalogue};

const RESULTS_FILE: &str = "SalesResults.txt";
const LABEL_ENV: &str = "COMPUTE_SALES_LABEL";

fn main() {
    let start = Instant::now();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<OsString> = env::args_os().collect();
    let label = env::var(LABEL_ENV).unwrap_or_else(|_| DEFAULT_LABEL.to_string());

    if let Err(err) = run(
        &args,
        start,
        label,
        Path::new(RESULTS_FILE),
        &mut io::stdout(),
    ) {
        match err {
            SalesError::Usage(usage) => eprintln!("{}", usage),
            err => eprintln!("Error: {}", err),
        }
        process::exit(1);
    }
}

/// Loads both files, totals the sales and emits the report to `console` and `output_path`.
///
/// Nothing is written to `output_path` unless every earlier step succeeded.
fn run(
    args: &[OsString],
    start: Instant,
    label: String,
    output_path: &Path,
    console: &mut dyn Write,
) -> Result<Report, SalesError> {
    let (catalogue_path, sales_path) = get_file_paths_from_args(args)?;

    let products: Vec<Product> = read_json(catalogue_path)?;
    let sales: Vec<SaleRecord> = read_json(sales_path)?;
    debug!(
        "loaded {} products from {} and {} sales from {}",
        products.len(),
        catalogue_path.display(),
        sales.len(),
        sales_path.display()
    );

    let calculation_start = Instant::now();
    let catalogue = create_price_catalogue(&products);
    let total = calculate_total_sales(&sales, &catalogue);
    let calculation_time = calculation_start.elapsed().as_secs_f64();
    let elapsed_time = start.elapsed().as_secs_f64();
    debug!(
        "{} unmatched sales, calculation took {:.6}s",
        total.unmatched.len(),
        calculation_time
    );

    let report = Report {
        label,
        total_sales: total.total,
        elapsed_time,
        calculation_time,
    };

    report.print(console).map_err(SalesError::Console)?;
    report.write_to(output_path)?;

    Ok(report)
}

fn get_file_paths_from_args(args: &[OsString]) -> Result<(&Path, &Path), SalesError> {
    match args {
        [_, catalogue, sales] => Ok((Path::new(catalogue), Path::new(sales))),
        _ => {
            let program = args
                .first()
                .map(|program| program.to_string_lossy())
                .unwrap_or_else(|| "compute-sales".into());
            Err(SalesError::Usage(format!(
                "Usage: {} <priceCatalogue.json> <salesRecord.json>",
                program
            )))
        }
    }
}
