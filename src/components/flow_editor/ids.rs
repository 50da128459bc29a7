/// Reference name for a freshly created module: `$` plus eight hex
/// characters, the same convention the backend uses for internal wires.
/// Entropy comes from `Math.random`; names only have to be unique within
/// one editing session.
pub fn module_ref() -> String {
	let bits = (js_sys::Math::random() * f64::from(u32::MAX)) as u32;
	format_ref(bits)
}

fn format_ref(bits: u32) -> String {
	format!("${:08x}", bits)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pads_to_eight_hex_chars() {
		assert_eq!(format_ref(0), "$00000000");
		assert_eq!(format_ref(0x2a), "$0000002a");
		assert_eq!(format_ref(0xdead_beef), "$deadbeef");
	}
}
