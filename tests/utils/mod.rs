use popu_ranking::RawRecord;

/// Header line of the census CSV
pub const HEADER: &str = "\"cat01_code\",\"男女別・性比\",\"cat02_code\",\"人口\",\"cat03_code\",\"年齢各歳\",\"area_code\",\"全国・都道府県\",\"time_code\",\"時間軸(年)\",\"unit\",\"value\",\"annotation\"";

/// A census row in the layout of the population estimates CSV
#[must_use]
pub fn census_row(sex: &str, category: &str, age: &str, population: &str) -> RawRecord {
    [
        "001",
        sex,
        "001",
        category,
        "01001",
        age,
        "00000",
        "全国",
        "1201",
        "2019年10月1日現在",
        "千人",
        population,
        "",
    ]
    .into_iter()
    .collect()
}

/// Unisex total-population row for one age
#[must_use]
pub fn total_row(age: &str, population: &str) -> RawRecord {
    census_row("男女計", "総人口", age, population)
}

/// Render records as quoted CSV lines, header first
#[must_use]
pub fn to_csv(records: &[RawRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for record in records {
        let line = record
            .fields()
            .iter()
            .map(|f| format!("\"{f}\""))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Every single age 0..=99 at 100 000 people each plus the open-ended top
/// age, preceded by noise rows the filter must drop
#[must_use]
pub fn full_census() -> Vec<RawRecord> {
    let mut records = vec![
        total_row("総数", "126167"),
        census_row("男", "総人口", "0歳", "459"),
        census_row("男女計", "日本人人口", "0歳", "880"),
    ];
    for age in 0..100 {
        records.push(total_row(&format!("{age}歳"), "100"));
    }
    records.push(total_row("100歳以上", "69"));
    records
}
