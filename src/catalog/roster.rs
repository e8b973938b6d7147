use crate::catalog::errors::RosterError;

/// Customer display names, positionally joined with [`PIG_PEN_SIZES`].
pub const CUSTOMER_NAMES: &[&str] = &[
    "Robert Ranch 1", "Siriporn Agricultural 2", "Siriporn Agriculture 3", "Siriporn Pig Farm 4", "Sarah Ranch 5",
    "Niran Farm 6", "Robert Pig Farm 7", "Niran Livestock Ltd 8", "Jennifer Livestock 9", "Jennifer Swine Ranch 10",
    "David Swine Ranch 11", "Lisa Farm 12", "Siriporn Farm 13", "Robert Farm 14", "Michael Pig Farm 15",
    "John Farm 16", "Malee Farm Corp 17", "John Livestock 18", "Lisa Farming Co 19", "Jennifer Farm 20",
    "Robert Ranch 21", "Jennifer Ranch 22", "Lisa Farm Corp 23", "David Pig Farm 24", "Sarah Farm Corp 25",
    "John Agriculture 26", "James Ranch 27", "Jennifer Livestock Ltd 28", "Malee Agriculture 29", "Niran Swine Ranch 30",
    "Somchai Farm 31", "Jennifer Ranch 32", "Niran Pig Farm 33", "Sarah Livestock Ltd 34", "Michael Pig Farm 35",
    "Mary Farm 36", "Michael Pig Farm 37", "James Livestock Ltd 38", "Ploy Farm Corp 39", "Sarah Pig Farm 40",
    "Ploy Ranch 41", "Ploy Farm 42", "Jennifer Farm Corp 43", "James Ranch 44", "Lisa Agricultural 45",
    "Lisa Agricultural 46", "Niran Ranch 47", "Siriporn Livestock 48", "Malee Farming Co 49", "Ploy Farm Corp 50",
    "Somchai Farm Corp 51", "James Farm 52", "Malee Livestock Ltd 53", "Niran Farm 54", "Ploy Farm Corp 55",
    "John Livestock 56", "Lisa Livestock 57", "Ploy Swine Ranch 58", "Somchai Livestock Ltd 59", "John Pig Farm 60",
    "Ploy Ranch 61", "Somchai Swine Ranch 62", "Ploy Farming Co 63", "Niran Pig Farm 64", "James Swine Ranch 65",
    "Suchart Swine Ranch 66", "Michael Farm Corp 67", "Michael Farming Co 68", "John Farm Corp 69", "Robert Farming Co 70",
    "Michael Farm Corp 71", "James Livestock Ltd 72", "Lisa Livestock 73", "Ploy Farm Corp 74", "Somchai Livestock 75",
    "John Agriculture 76", "Sarah Pig Farm 77", "Niran Farm 78", "Lisa Agricultural 79", "Robert Livestock Ltd 80",
    "Jennifer Livestock Ltd 81", "Mary Agricultural 82", "Robert Farm Corp 83", "Malee Ranch 84", "Niran Farm Corp 85",
    "Sarah Livestock Ltd 86", "Mary Livestock Ltd 87", "Niran Swine Ranch 88", "Jennifer Ranch 89", "Niran Farm Corp 90",
    "Lisa Swine Ranch 91", "Malee Farm Corp 92", "Siriporn Farming Co 93", "Suchart Farming Co 94", "Siriporn Livestock Ltd 95",
    "Michael Agricultural 96", "Sarah Ranch 97", "Lisa Livestock 98", "Ploy Agricultural 99", "Sarah Agriculture 100"
];

/// Pig head count per customer, positionally joined with [`CUSTOMER_NAMES`].
pub const PIG_PEN_SIZES: &[u32] = &[
    17, 10, 40, 22, 11, 19, 38, 41, 14, 15, 18, 19, 13, 24, 26, 35, 41, 46, 24, 45,
    32, 35, 16, 17, 17, 22, 22, 16, 47, 38, 36, 29, 42, 35, 14, 22, 39, 18, 29, 48,
    24, 41, 27, 14, 41, 48, 45, 10, 14, 42, 17, 27, 19, 25, 42, 12, 41, 19, 17, 28,
    31, 34, 40, 48, 44, 36, 20, 32, 43, 32, 22, 48, 47, 47, 44, 48, 45, 48, 20, 14,
    22, 14, 28, 15, 18, 37, 41, 33, 15, 24, 46, 34, 45, 47, 26, 31, 36, 26, 47, 11
];

/// Branch names of the feed shop, rotated across transactions.
pub const SHOP_NAMES: &[&str] = &[
    "ร้านอาหารสัตว์เจ็ท สาขา 1", "ร้านอาหารสัตว์เจ็ท สาขา 2", "ร้านอาหารสัตว์เจ็ท สาขา 3",
    "ร้านอาหารสัตว์เจ็ท สาขา 4", "ร้านอาหารสัตว์เจ็ท สาขา 5", "ร้านอาหารสัตว์เจ็ท สาขา 6",
    "ร้านอาหารสัตว์เจ็ท สาขา 7", "ร้านอาหารสัตว์เจ็ท สาขา 8", "ร้านอาหารสัตว์เจ็ท สาขา 9",
    "ร้านอาหารสัตว์เจ็ท สาขา 10"
];

/// Thai mobile prefixes used for the synthesized buyer phone numbers.
pub const PHONE_PREFIXES: &[&str] = &[
    "081", "082", "083", "084", "085", "086", "087", "088", "089", "090",
    "091", "092", "093", "094", "095", "096", "097", "098", "099", "020"
];

/// One customer from the fixed roster.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Member code derived from the 1-based roster index.
    pub code: String,
    pub name: &'static str,
    pub pig_count: u32
}

/// Materializes the customer roster from the two parallel constant lists.
///
/// # Errors
/// Returns `RosterError::Misaligned` if the name and pen-size lists do not
/// have the same length.
pub fn customers() -> Result<Vec<Customer>, RosterError> {
    if CUSTOMER_NAMES.len() != PIG_PEN_SIZES.len() {
        return Err(RosterError::Misaligned {
            names: CUSTOMER_NAMES.len(),
            pen_sizes: PIG_PEN_SIZES.len()
        });
    }

    let roster = CUSTOMER_NAMES.iter()
        .zip(PIG_PEN_SIZES)
        .enumerate()
        .map(|(position, (name, pig_count))| Customer {
            code: format!("M{:06}", position + 1),
            name,
            pig_count: *pig_count
        })
        .collect();

    Ok(roster)
}
