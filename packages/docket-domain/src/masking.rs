/// Masks a combined driver license such as "FL-ABC123456" or "ABC123456",
/// keeping the jurisdiction prefix when present and the last 4 characters of
/// the number. Numbers of 4 characters or fewer are too short to mask and pass
/// through unchanged.
pub fn mask_driver_license(combined: Option<&str>) -> Option<String> {
	let combined = combined.map(str::trim).filter(|value| !value.is_empty())?;
	let (state, number) = match combined.find('-') {
		Some(dash) if dash > 0 && dash < combined.len() - 1 =>
			(Some(&combined[..dash]), &combined[dash + 1..]),
		_ => (None, combined),
	};
	let masked = mask_keep_last4(number);

	match state {
		Some(state) => Some(format!("{state}-{masked}")),
		None => Some(masked),
	}
}

fn mask_keep_last4(value: &str) -> String {
	let chars: Vec<char> = value.chars().collect();

	if chars.len() <= 4 {
		return value.to_string();
	}

	let mut masked = "*".repeat(chars.len() - 4);

	masked.extend(&chars[chars.len() - 4..]);

	masked
}
