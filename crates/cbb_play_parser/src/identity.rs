use crate::schema::roster::{PlayerId, PlayerIdentity, Roster};
use tracing::debug;

/// A fuzzy match must score above this to be accepted.
pub const SIMILARITY_THRESHOLD: i32 = 3;

/// Flat score added when a two-initial name agrees with the other name's initials.
pub const INITIALS_BONUS: i32 = 4;

/// Rewrites a box-score style name into display order and drops non-ASCII.
///
/// "Last, First" becomes "First Last"; a generational suffix written between the
/// two ("Last, Jr., First") moves to the end. Missing spaces after commas are
/// tolerated. Accented Latin letters are folded to their base letter first.
#[must_use]
pub fn clean_name(raw: &str) -> String {
	let ascii: String = raw.chars().map(fold_diacritic).filter(char::is_ascii).collect();
	let parts: Vec<&str> = ascii.split(',').map(str::trim).filter(|part| !part.is_empty()).collect();

	match parts.as_slice() {
		[] => String::new(),
		[single] => collapse_whitespace(single),
		[last, first] => collapse_whitespace(&format!("{first} {last}")),
		[last, suffixes @ .., first] => collapse_whitespace(&format!("{first} {last}, {}", suffixes.join(", "))),
	}
}

/// Python-style title casing: a letter is upper-cased when it follows a
/// non-letter, lower-cased otherwise. "O'NEILL" becomes "O'Neill".
#[must_use]
pub fn title_case(text: &str) -> String {
	let mut titled = String::with_capacity(text.len());
	let mut previous_is_letter = false;
	for c in text.chars() {
		if c.is_alphabetic() {
			if previous_is_letter {
				titled.extend(c.to_lowercase());
			} else {
				titled.extend(c.to_uppercase());
			}
			previous_is_letter = true;
		} else {
			titled.push(c);
			previous_is_letter = false;
		}
	}
	titled
}

/// Canonical form for exact name comparison: case, whitespace, periods and
/// common Latin diacritics do not matter, and "Last, First" equals "First Last".
#[must_use]
pub fn normalize_name(name: &str) -> String {
	clean_name(name).to_lowercase().replace('.', "").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold_diacritic(c: char) -> char {
	match c {
		'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
		'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
		'é' | 'è' | 'ê' | 'ë' => 'e',
		'É' | 'È' | 'Ê' | 'Ë' => 'E',
		'í' | 'ì' | 'î' | 'ï' => 'i',
		'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
		'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' => 'o',
		'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ø' => 'O',
		'ú' | 'ù' | 'û' | 'ü' => 'u',
		'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
		'ñ' => 'n',
		'Ñ' => 'N',
		'ç' => 'c',
		'Ç' => 'C',
		'ý' | 'ÿ' => 'y',
		'Ý' => 'Y',
		other => other,
	}
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn similarity_form(name: &str) -> Vec<char> {
	name.to_lowercase().replace('.', "").chars().collect()
}

/// Returns the two initials when `name` is nothing but two initials, e.g.
/// "J.S." or "J. S.".
fn two_initials(name: &str) -> Option<[char; 2]> {
	let letters: Vec<char> = name.chars().filter(|c| !c.is_whitespace() && *c != '.').flat_map(char::to_lowercase).collect();
	match letters.as_slice() {
		[first, last] if first.is_alphabetic() && last.is_alphabetic() => Some([*first, *last]),
		_ => None,
	}
}

/// First letters of the first and last words.
fn initials_of(name: &str) -> Option<[char; 2]> {
	let mut words = name.split_whitespace().filter_map(|word| word.chars().find(|c| c.is_alphabetic()));
	let first = words.next()?;
	let last = words.last()?;
	Some([first.to_ascii_lowercase(), last.to_ascii_lowercase()])
}

/// Scores how alike two names are.
///
/// Counts the 3-character windows of `query` (lower-cased, periods removed)
/// that occur anywhere in `candidate`, doubles it, and subtracts the length
/// difference. When either side is exactly two initials matching the other
/// side's initials, the length penalty is waived and [`INITIALS_BONUS`] is
/// added instead.
#[must_use]
pub fn similarity_score(query: &str, candidate: &str) -> i32 {
	let query_chars = similarity_form(query);
	let candidate_text: String = similarity_form(candidate).into_iter().collect();

	let matches = query_chars.windows(3).filter(|window| candidate_text.contains(&window.iter().collect::<String>())).count();
	let matches = i32::try_from(matches).unwrap_or(i32::MAX / 2);

	let initials_agree = match (two_initials(query), two_initials(candidate)) {
		(Some(initials), _) => initials_of(candidate) == Some(initials),
		(None, Some(initials)) => initials_of(query) == Some(initials),
		(None, None) => false,
	};
	if initials_agree {
		return 2 * matches + INITIALS_BONUS;
	}

	let length_difference = i32::try_from(query_chars.len().abs_diff(candidate_text.chars().count())).unwrap_or(i32::MAX / 2);
	2 * matches - length_difference
}

/// Maps a name as written in the feed onto one of `roster`'s players.
///
/// Lookup order is exact id, exact normalized name, then best similarity score
/// above [`SIMILARITY_THRESHOLD`] (earlier roster entries win ties). Anything
/// else becomes a placeholder that is registered in `roster`, so the next
/// mention of the same text resolves to it.
pub fn resolve(name: &str, id: Option<PlayerId>, roster: &mut Roster) -> PlayerIdentity {
	if let Some(found) = id.and_then(|id| roster.by_id(id)) {
		return found.clone();
	}

	let normalized = normalize_name(name);
	if let Some(found) = roster.iter().find(|player| normalize_name(player.name()) == normalized) {
		return found.clone();
	}

	let mut best: Option<(&PlayerIdentity, i32)> = None;
	for player in roster.iter() {
		let score = similarity_score(name, player.name());
		if score > SIMILARITY_THRESHOLD && best.map_or(true, |(_, best_score)| score > best_score) {
			best = Some((player, score));
		}
	}
	if let Some((found, score)) = best {
		debug!(name, matched = found.name(), score, "Resolved player by similarity");
		return found.clone();
	}

	let placeholder = match id {
		Some(id) => PlayerIdentity::rostered(id, name.trim()),
		None => PlayerIdentity::placeholder(name.trim()),
	};
	debug!(name, identity = %placeholder, "No roster match, registering player");
	roster.register(placeholder.clone());
	placeholder
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::roster::RosterEntry;

	#[test]
	fn test_clean_name() {
		let test_cases = vec![
			("Last, First", "First Last"),
			("Last, Jr., First", "First Last, Jr."),
			("Last,First", "First Last"),
			("Last, Jr.,First", "First Last, Jr."),
			("BAYLOR, Noah", "Noah BAYLOR"),
			("Carlyle, Christian", "Christian Carlyle"),
			("Chris Howell", "Chris Howell"),
			("Núñez, José", "Jose Nunez"),
			("Ngöbe, Zoë", "Zoe Ngobe"),
			("Ab’dul, Kareem", "Kareem Abdul"),
			("", ""),
		];

		for (input, expected) in test_cases {
			assert_eq!(clean_name(input), expected, "Failed for input: {input}");
		}
	}

	#[test]
	fn test_title_case() {
		let test_cases = vec![
			("CHRIS HOWELL", "Chris Howell"),
			("MIKE O'NEILL", "Mike O'Neill"),
			("JEAN-LUC SMITH JR.", "Jean-Luc Smith Jr."),
			("3PT", "3Pt"),
		];

		for (input, expected) in test_cases {
			assert_eq!(title_case(input), expected, "Failed for input: {input}");
		}
	}

	#[test]
	fn test_normalize_name() {
		assert_eq!(normalize_name("Núñez, José"), "jose nunez");
		assert_eq!(normalize_name("  J.J.   Smith "), "jj smith");
		assert_eq!(normalize_name("Smith, J.J."), normalize_name("JJ SMITH"));
	}

	#[test]
	fn test_similarity_score() {
		let test_cases = vec![
			("Chris Howell", "Chris Howell", 20),
			// "n s", " sm", "smi", "mit", "ith" match; one character shorter
			("John Smith", "Jon Smith", 9),
			("Jesus Cruz", "Noah Baylor", -1),
			("J.S.", "John Smith", 4),
			("John Smith", "J. S.", 4),
			("J.S.", "Kevin Smith", -9),
		];

		for (query, candidate, expected) in test_cases {
			assert_eq!(similarity_score(query, candidate), expected, "Failed for input: {query} vs {candidate}");
		}
	}

	fn roster() -> Roster {
		Roster::from_entries(&[
			RosterEntry::new(1, "Smith, John"),
			RosterEntry::new(2, "Smith, Jonathan"),
			RosterEntry::new(3, "Núñez, José"),
		])
	}

	#[test]
	fn test_resolve_prefers_id_then_exact_name() {
		let mut roster = roster();
		assert_eq!(resolve("whoever", Some(PlayerId(2)), &mut roster).id(), Some(PlayerId(2)));
		assert_eq!(resolve("JOHN SMITH", None, &mut roster).id(), Some(PlayerId(1)));
		assert_eq!(resolve("Jose Nunez", None, &mut roster).id(), Some(PlayerId(3)));
		assert_eq!(roster.len(), 3);
	}

	#[test]
	fn test_resolve_by_similarity() {
		let mut roster = roster();
		let resolved = resolve("Jon Smith", None, &mut roster);
		assert_eq!(resolved.id(), Some(PlayerId(1)));
	}

	#[test]
	fn test_resolve_registers_placeholder_once() {
		let mut roster = roster();
		let first = resolve("Walk On", None, &mut roster);
		assert!(first.is_placeholder());
		assert_eq!(roster.len(), 4);

		let second = resolve("Walk On", None, &mut roster);
		assert_eq!(first, second);
		assert_eq!(roster.len(), 4);
	}
}
