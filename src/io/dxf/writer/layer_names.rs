//! Layer-name helpers for the encoder

use crate::feature::Feature;
use crate::geometry::HOLE_LAYER_SUFFIX;
use indexmap::IndexSet;

/// Longest layer name R12 readers accept
pub const MAX_LAYER_NAME_LEN: usize = 31;

/// ASCII replacement for every code point below U+0180. Control characters
/// map to nothing, punctuation to `_`, accented letters to their base letter.
#[rustfmt::skip]
static ASCII_REPLACEMENT: [&str; 384] = [
    "","","","","","","","","","","","","","","","",
    "","","","","","","","","","","","","","","","",
    "_","_","_","_","_","_","_","_","_","_","_","_","_","-",".","_",
    "0","1","2","3","4","5","6","7","8","9","_","_","_","_","_","_",
    "_","A","B","C","D","E","F","G","H","I","J","K","L","M","N","O",
    "P","Q","R","S","T","U","V","W","X","Y","Z","_","_","_","_","_",
    "_","a","b","c","d","e","f","g","h","i","j","k","l","m","n","o",
    "p","q","r","s","t","u","v","w","x","y","z","_","_","_","_","",
    "","","","","","","","","","","","","","","","",
    "","","","","","","","","","","","","","","","",
    "_","_","c","L","_","Y","_","_","","c","a","","_","-","r","",
    "o","_","2","3","","u","_",".","","1","o","","_","_","_","_",
    "A","A","A","A","A","A","AE","C","E","E","E","E","I","I","I","I",
    "E","N","O","O","O","O","O","x","O","U","U","U","U","Y","T","SS",
    "a","a","a","a","a","a","ae","c","e","e","e","e","i","i","i","i",
    "e","n","o","o","o","o","o","_","0","u","u","u","u","y","t","y",
    "A","a","A","a","A","a","C","c","C","c","C","c","C","c","D","d",
    "D","d","E","e","E","e","E","e","E","e","E","e","G","g","G","g",
    "G","g","G","g","H","h","H","h","I","i","I","i","I","i","I","i",
    "I","i","IJ","ij","J","j","K","k","k","L","l","L","l","L","l","L",
    "l","L","l","N","n","N","n","N","n","n","N","n","O","o","O","o",
    "O","o","OE","oe","R","r","R","r","R","r","S","s","S","s","S","s",
    "S","s","T","t","T","t","T","t","U","u","U","u","U","u","U","u",
    "U","u","U","u","W","w","Y","y","Y","Z","z","Z","z","Z","z","_",
];

/// Turn an arbitrary name into a layer name R12 readers accept.
///
/// The name is trimmed and transliterated to ASCII letters, digits, `-`,
/// `.` and `_`, then cut to [`MAX_LAYER_NAME_LEN`] characters.
pub fn sanitize_layer_name(name: &str) -> String {
    let mut sanitized: String = name
        .trim()
        .chars()
        .map(|c| ASCII_REPLACEMENT.get(c as usize).copied().unwrap_or("_"))
        .collect();
    // replacements are ASCII, so byte length equals char count
    sanitized.truncate(MAX_LAYER_NAME_LEN);
    sanitized
}

/// Distinct LAYER values of `features` in first-seen order.
///
/// Blank names and names already carrying the hole suffix are left out.
pub fn collect_layer_names(features: &[Feature]) -> Vec<String> {
    let names: IndexSet<&str> = features
        .iter()
        .filter_map(|f| f.layer.as_deref())
        .filter(|name| !name.trim().is_empty() && !name.ends_with(HOLE_LAYER_SUFFIX))
        .collect();
    names.into_iter().map(str::to_string).collect()
}
