use super::columns;

const SAMPLE_ROWS: [[&str; 9]; 2] = [
    [
        "Paracetamol 500mg",
        "PCM001",
        "100",
        "50",
        "7500",
        "2025-12-15",
        "BCH001-2024",
        "PT Pharma Indonesia",
        "Analgesik",
    ],
    [
        "Amoxicillin 250mg",
        "AMX001",
        "50",
        "30",
        "2500",
        "2025-08-20",
        "BCH002-2024",
        "PT Antibiotik Nusantara",
        "Antibiotik",
    ],
];

/// Downloadable example file: the full header and two sample rows.
pub fn template_csv() -> String {
    std::iter::once(columns::ALL.join(","))
        .chain(SAMPLE_ROWS.iter().map(|row| row.join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}
