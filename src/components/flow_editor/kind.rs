/// Operator taxonomy behind the numeric `type` tag.
///
/// The backend reserves 0..=39; only the tags below are in active use.
/// Unknown tags still render and edit normally, they just fall back to
/// neutral styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleKind {
	Label,
	Over,
	Under,
	Average,
	Minimum,
	Maximum,
	Subtract,
	Compare,
	Change,
	IfNull,
	Severity,
	TimeDiff,
	Count,
}

impl ModuleKind {
	/// Map a raw tag to its kind. Reserved tags return `None`.
	pub fn of(module_type: u32) -> Option<ModuleKind> {
		match module_type {
			0 => Some(ModuleKind::Label),
			1 => Some(ModuleKind::Over),
			2 => Some(ModuleKind::Under),
			3 => Some(ModuleKind::Average),
			7 => Some(ModuleKind::Minimum),
			8 => Some(ModuleKind::Maximum),
			12 => Some(ModuleKind::Subtract),
			15 => Some(ModuleKind::Compare),
			16 => Some(ModuleKind::Change),
			17 => Some(ModuleKind::IfNull),
			18 => Some(ModuleKind::Severity),
			19 => Some(ModuleKind::TimeDiff),
			26 => Some(ModuleKind::Count),
			_ => None,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			ModuleKind::Label => "LABEL",
			ModuleKind::Over => "OVER",
			ModuleKind::Under => "UNDER",
			ModuleKind::Average => "AVG",
			ModuleKind::Minimum => "MIN",
			ModuleKind::Maximum => "MAX",
			ModuleKind::Subtract => "SUBTRACT",
			ModuleKind::Compare => "CMP",
			ModuleKind::Change => "CHG",
			ModuleKind::IfNull => "IFNUL",
			ModuleKind::Severity => "SEV",
			ModuleKind::TimeDiff => "TD",
			ModuleKind::Count => "COUNT",
		}
	}

	/// Short operator glyph for the node header. Label modules show the
	/// tag they alias instead, so their glyph is empty.
	pub fn glyph(self) -> &'static str {
		match self {
			ModuleKind::Label => "",
			ModuleKind::Over => ">",
			ModuleKind::Under => "<",
			ModuleKind::Average => "AVG",
			ModuleKind::Minimum => "MIN",
			ModuleKind::Maximum => "MAX",
			ModuleKind::Subtract => "-",
			ModuleKind::Compare => "CMP",
			ModuleKind::Change => "CHG",
			ModuleKind::IfNull => "IFNUL",
			ModuleKind::Severity => "SEV",
			ModuleKind::TimeDiff => "TD",
			ModuleKind::Count => "COUNT",
		}
	}

	/// CSS modifier selecting the node's border color.
	pub fn border_class(self) -> &'static str {
		match self {
			ModuleKind::Label => "module-node--label",
			ModuleKind::Over => "module-node--over",
			ModuleKind::Under => "module-node--under",
			ModuleKind::Average => "module-node--average",
			ModuleKind::Minimum => "module-node--minimum",
			ModuleKind::Maximum => "module-node--maximum",
			ModuleKind::Subtract => "module-node--subtract",
			ModuleKind::Compare => "module-node--compare",
			ModuleKind::Change => "module-node--change",
			ModuleKind::IfNull => "module-node--ifnul",
			ModuleKind::Severity => "module-node--severity",
			ModuleKind::TimeDiff => "module-node--timediff",
			ModuleKind::Count => "module-node--count",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn maps_active_tags() {
		assert_eq!(ModuleKind::of(0), Some(ModuleKind::Label));
		assert_eq!(ModuleKind::of(1), Some(ModuleKind::Over));
		assert_eq!(ModuleKind::of(18), Some(ModuleKind::Severity));
		assert_eq!(ModuleKind::of(19), Some(ModuleKind::TimeDiff));
		assert_eq!(ModuleKind::of(26), Some(ModuleKind::Count));
	}

	#[test]
	fn reserved_tags_have_no_kind() {
		assert_eq!(ModuleKind::of(4), None);
		assert_eq!(ModuleKind::of(11), None);
		assert_eq!(ModuleKind::of(39), None);
		assert_eq!(ModuleKind::of(4000), None);
	}

	#[test]
	fn glyphs_stay_short() {
		assert_eq!(ModuleKind::Over.glyph(), ">");
		assert_eq!(ModuleKind::Severity.glyph(), "SEV");
		assert_eq!(ModuleKind::Label.glyph(), "");
	}
}
