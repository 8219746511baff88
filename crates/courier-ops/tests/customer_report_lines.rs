use courier_ops::workflows::report::{
    gather_customer_data, report_lines, Customer, ReportLine, LOCATION_LABEL, NAME_LABEL,
};

#[test]
fn report_lines_return_name_then_location() {
    let customer = Customer::new("Kaio", "Lisbon");
    let lines = report_lines(&customer);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].label, "name");
    assert_eq!(lines[0].value, customer.name);
    assert_eq!(lines[1].label, "location");
    assert_eq!(lines[1].value, customer.location);
}

#[test]
fn report_lines_hold_for_arbitrary_customers() {
    let customers = [
        Customer::new("", ""),
        Customer::new("Zoë Ångström", "São Paulo"),
        Customer::new("Name, with comma", "Line\nbreak"),
    ];

    for customer in &customers {
        assert_eq!(
            report_lines(customer),
            vec![
                ReportLine::new(NAME_LABEL, customer.name.clone()),
                ReportLine::new(LOCATION_LABEL, customer.location.clone()),
            ]
        );
    }
}

#[test]
fn gather_matches_report_lines() {
    let customer = Customer::new("Kaio", "Lisbon");
    let mut lines = Vec::new();
    gather_customer_data(&mut lines, &customer);
    assert_eq!(lines, report_lines(&customer));
}

#[test]
fn rendered_lines_read_as_report() {
    let rendered: Vec<String> = report_lines(&Customer::new("Kaio", "Lisbon"))
        .iter()
        .map(ReportLine::to_string)
        .collect();
    assert_eq!(rendered, vec!["name: Kaio", "location: Lisbon"]);
}
