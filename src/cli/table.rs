use tabled::builder::Builder;
use tabled::settings::Style;

/// Amounts are kept at full precision and rounded only here.
pub fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

pub fn render<const N: usize>(header: [&str; N], rows: Vec<[String; N]>) -> String {
    if rows.is_empty() {
        return "No records yet".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(header);
    for row in rows {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}
