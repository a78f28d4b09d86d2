use super::trie::{RomajiTrie, TrieLookupResult};

pub struct RomajiConvertResult {
    pub composed_kana: String,
    pub pending_romaji: String,
}

/// Map kana vowel chars to their romaji equivalents for collapse_latin_kana.
fn kana_vowel_to_romaji(ch: char) -> Option<char> {
    match ch {
        'あ' => Some('a'),
        'い' => Some('i'),
        'う' => Some('u'),
        'え' => Some('e'),
        'お' => Some('o'),
        _ => None,
    }
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Collapse sequences of latin consonant(s) + kana vowel into a single kana.
/// e.g. "kあ" → "か", "shあ" → "しゃ"
fn collapse_latin_kana(input: &str, trie: &RomajiTrie) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch.is_ascii_lowercase() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_lowercase() {
                j += 1;
            }

            if let Some(vowel) = chars.get(j).copied().and_then(kana_vowel_to_romaji) {
                let latin: String = chars[i..j].iter().collect();
                if let TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) =
                    trie.lookup(&format!("{latin}{vowel}"))
                {
                    result.push_str(&kana);
                    i = j + 1;
                    continue;
                }
            }

            // No collapse: keep the whole latin run as-is.
            result.extend(&chars[i..j]);
            i = j;
        } else {
            result.push(ch);
            i += 1;
        }
    }

    result
}

/// Convert pending romaji to kana using the global table.
///
/// When `force` is true, ambiguous sequences are resolved immediately
/// (e.g. trailing "n" becomes "ん") and unmatched letters are emitted as-is,
/// so `pending_romaji` always comes back empty.
pub fn convert_romaji(
    composed_kana: &str,
    pending_romaji: &str,
    force: bool,
) -> RomajiConvertResult {
    convert_with(RomajiTrie::global(), composed_kana, pending_romaji, force)
}

pub(crate) fn convert_with(
    trie: &RomajiTrie,
    composed_kana: &str,
    pending_romaji: &str,
    force: bool,
) -> RomajiConvertResult {
    let mut composed = composed_kana.to_string();
    let mut pending = pending_romaji.to_string();

    let mut changed = true;
    while !pending.is_empty() && changed {
        changed = false;

        match trie.lookup(&pending) {
            TrieLookupResult::Exact(kana) => {
                composed.push_str(&kana);
                pending.clear();
                changed = true;
            }

            TrieLookupResult::ExactAndPrefix(kana) => {
                if force {
                    composed.push_str(&kana);
                    pending.clear();
                    changed = true;
                }
            }

            TrieLookupResult::Prefix => {
                if !force {
                    break;
                }
                handle_no_match(trie, &mut composed, &mut pending, force, &mut changed);
            }

            TrieLookupResult::None => {
                handle_no_match(trie, &mut composed, &mut pending, force, &mut changed);
            }
        }
    }

    if composed.chars().any(|c| c.is_ascii_lowercase()) {
        composed = collapse_latin_kana(&composed, trie);
    }

    RomajiConvertResult {
        composed_kana: composed,
        pending_romaji: pending,
    }
}

/// Handle the case where `pending` has no full match: try sub-prefix,
/// sokuon/hatsuon detection, or force-drain.
fn handle_no_match(
    trie: &RomajiTrie,
    composed: &mut String,
    pending: &mut String,
    force: bool,
    changed: &mut bool,
) {
    // Longest matching sub-prefix first. ExactAndPrefix is consumed here even
    // without `force`: the full pending already failed, no longer match exists.
    let boundaries: Vec<usize> = pending.char_indices().skip(1).map(|(i, _)| i).collect();
    for &len in boundaries.iter().rev() {
        if let TrieLookupResult::Exact(kana) | TrieLookupResult::ExactAndPrefix(kana) =
            trie.lookup(&pending[..len])
        {
            composed.push_str(&kana);
            pending.drain(..len);
            *changed = true;
            return;
        }
    }

    let mut chars = pending.chars();
    let (Some(first), second) = (chars.next(), chars.next()) else {
        return;
    };

    match second {
        Some(second)
            if first == second
                && first != 'n'
                && first.is_ascii_alphabetic()
                && !is_vowel(first) =>
        {
            // Sokuon (っ): doubled consonant
            composed.push('っ');
            pending.remove(0);
            *changed = true;
        }
        Some(second) if first == 'n' && !is_vowel(second) && second != 'n' && second != 'y' => {
            // Hatsuon (ん): n before non-vowel, non-n, non-y
            composed.push('ん');
            pending.remove(0);
            *changed = true;
        }
        Some(_) => {
            if force {
                composed.push(pending.remove(0));
                *changed = true;
            }
            // else: wait for more keys
        }
        None => {
            if first == 'n' {
                // Unforced "n" stays pending (could be the start of "na").
                if !force {
                    return;
                }
                composed.push('ん');
            } else {
                composed.push(first);
            }
            pending.clear();
            *changed = true;
        }
    }
}
