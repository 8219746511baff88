use clap::Args;
use courier_ops::error::AppError;
use courier_ops::workflows::rating::{Driver, DriverRatingView};
use courier_ops::workflows::report::{report_lines, Customer};
use courier_ops::workflows::roster::{DriverRoster, RatedDriver};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct RatingArgs {
    /// Number of late deliveries for a single driver
    #[arg(long)]
    pub(crate) late_deliveries: Option<u32>,
    /// Driver roster CSV with `Driver` and `Late Deliveries` columns
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Customer name
    #[arg(long)]
    pub(crate) name: String,
    /// Customer location
    #[arg(long)]
    pub(crate) location: String,
}

pub(crate) fn run_rating(args: RatingArgs) -> Result<(), AppError> {
    let RatingArgs {
        late_deliveries,
        roster,
    } = args;

    match (roster, late_deliveries) {
        (Some(path), _) => {
            let rated = DriverRoster::from_path(path)?;
            print!("{}", render_roster(&rated));
        }
        (None, Some(late)) => print!("{}", render_rating(&Driver::new(late))),
        (None, None) => {}
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) {
    let customer = Customer::new(args.name, args.location);
    print!("{}", render_report(&customer));
}

pub(crate) fn run_demo() {
    print!("{}", render_demo());
}

fn render_rating(driver: &Driver) -> String {
    let view = DriverRatingView::from(driver);
    format!(
        "Late deliveries: {} -> rating {} ({})\n",
        view.late_deliveries, view.rating, view.rating_label
    )
}

fn render_roster(rated: &[RatedDriver]) -> String {
    if rated.is_empty() {
        return "Driver roster: no drivers\n".to_string();
    }

    let mut out = String::from("Driver roster\n");
    for entry in rated {
        let view = entry.view();
        writeln!(
            out,
            "- {}: {} late, rating {} ({})",
            view.driver, view.late_deliveries, view.rating, view.rating_label
        )
        .expect("write roster line");
    }
    out
}

fn render_report(customer: &Customer) -> String {
    report_lines(customer)
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
}

fn render_demo() -> String {
    let mut out = String::from("Driver ratings\n");
    for late in [4, 5, 6] {
        out.push_str("- ");
        out.push_str(&render_rating(&Driver::new(late)));
    }

    out.push_str("\nCustomer report\n");
    for line in report_lines(&Customer::new("Kaio", "Lisbon")) {
        writeln!(out, "- {line}").expect("write report line");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_ops::workflows::rating::rate_driver;

    #[test]
    fn rating_output_names_value_and_label() {
        assert_eq!(
            render_rating(&Driver::new(6)),
            "Late deliveries: 6 -> rating 2 (Elevated)\n"
        );
    }

    #[test]
    fn report_output_lists_name_first() {
        assert_eq!(
            render_report(&Customer::new("Kaio", "Lisbon")),
            "name: Kaio\nlocation: Lisbon\n"
        );
    }

    #[test]
    fn roster_output_handles_empty_and_filled_rosters() {
        assert_eq!(render_roster(&[]), "Driver roster: no drivers\n");

        let driver = Driver::new(7);
        let rated = vec![RatedDriver {
            name: "Beatriz".to_string(),
            rating: rate_driver(&driver),
            driver,
        }];
        assert_eq!(
            render_roster(&rated),
            "Driver roster\n- Beatriz: 7 late, rating 2 (Elevated)\n"
        );
    }

    #[test]
    fn demo_covers_reference_scenarios() {
        let demo = render_demo();
        assert!(demo.contains("Late deliveries: 4 -> rating 1"));
        assert!(demo.contains("Late deliveries: 5 -> rating 1"));
        assert!(demo.contains("Late deliveries: 6 -> rating 2"));
        assert!(demo.contains("- name: Kaio\n- location: Lisbon\n"));
    }
}
