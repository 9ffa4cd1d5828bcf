//! Invoice numbering
//!
//! Numbers are sequential per calendar year, zero-padded to four
//! digits: `YYYY-NNNN`. The next number is always derived from the
//! current full set of invoice numbers; callers generating a batch
//! must feed freshly assigned numbers back into the set, or two
//! invoices in the batch would collide.

/// Derive the next invoice number for a year
///
/// Numbers from other years and malformed entries are ignored; a year
/// with no invoices yet starts at `YYYY-0001`.
pub fn next_invoice_number<'a, I>(existing: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max_sequence = existing
        .into_iter()
        .filter_map(|number| parse_invoice_number(number))
        .filter(|(y, _)| *y == year)
        .map(|(_, seq)| seq)
        .max()
        .unwrap_or(0);

    format!("{year}-{:04}", max_sequence + 1)
}

/// Parse `YYYY-NNNN` into (year, sequence); None for malformed input
fn parse_invoice_number(number: &str) -> Option<(i32, u32)> {
    let (year, seq) = number.split_once('-')?;
    Some((year.parse().ok()?, seq.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_invoice_of_year() {
        let existing: Vec<&str> = vec![];
        assert_eq!(next_invoice_number(existing, 2025), "2025-0001");
    }

    #[test]
    fn test_continues_from_max_sequence() {
        let existing = ["2025-0003", "2025-0007", "2025-0001"];
        assert_eq!(
            next_invoice_number(existing.iter().copied(), 2025),
            "2025-0008"
        );
    }

    #[test]
    fn test_other_years_ignored() {
        let existing = ["2024-0199", "2025-0002"];
        assert_eq!(
            next_invoice_number(existing.iter().copied(), 2025),
            "2025-0003"
        );
    }

    #[test]
    fn test_malformed_numbers_ignored() {
        let existing = ["draft", "2025-xyz", "2025-0004"];
        assert_eq!(
            next_invoice_number(existing.iter().copied(), 2025),
            "2025-0005"
        );
    }

    #[test]
    fn test_batch_generation_no_collisions() {
        // Existing max 0007; three invoices generated in one batch
        let mut numbers: Vec<String> =
            vec!["2025-0005".to_string(), "2025-0007".to_string()];
        let mut assigned = Vec::new();
        for _ in 0..3 {
            let next = next_invoice_number(numbers.iter().map(String::as_str), 2025);
            numbers.push(next.clone());
            assigned.push(next);
        }
        assert_eq!(assigned, vec!["2025-0008", "2025-0009", "2025-0010"]);
    }

    #[test]
    fn test_sequence_padding() {
        let existing = ["2025-0099"];
        assert_eq!(
            next_invoice_number(existing.iter().copied(), 2025),
            "2025-0100"
        );
    }
}
