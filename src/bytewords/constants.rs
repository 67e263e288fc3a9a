// SPDX-FileCopyrightText: © 2020 Dominik Spicher <dominikspicher@gmail.com>
// SPDX-License-Identifier: MIT

//! The fixed 256-word Bytewords lexicon and its lookup tables.
//!
//! The lexicon is chosen so that the first and last letter of every word is
//! a unique pair; this is what makes the [minimal](super::Style::Minimal)
//! style's two-letter-per-byte encoding reversible.

/// The full four-letter word for each byte value, in order.
#[rustfmt::skip]
pub const WORDS: [&str; 256] = [
    "able", "acid", "also", "apex", "aqua", "arch", "atom", "aunt",
    "away", "axis", "back", "bald", "barn", "beta", "bias", "blue",
    "body", "brag", "brew", "bulb", "buzz", "calm", "cash", "cats",
    "chef", "city", "claw", "code", "cola", "cook", "cost", "crux",
    "curl", "cusp", "cyan", "dark", "data", "days", "deli", "dice",
    "diet", "dish", "daub", "down", "draw", "drop", "drum", "dull",
    "duty", "each", "easy", "echo", "edge", "epic", "even", "exam",
    "exit", "eyes", "fact", "fair", "fern", "figs", "film", "fish",
    "fizz", "flap", "flew", "flux", "foxy", "free", "frog", "fuel",
    "fund", "gala", "game", "gear", "gems", "gift", "girl", "glow",
    "good", "gray", "grim", "guru", "gush", "gyro", "half", "hang",
    "hard", "hawk", "heat", "help", "high", "hill", "holy", "hope",
    "horn", "huts", "iced", "idea", "idle", "inch", "inky", "into",
    "iris", "iron", "item", "jade", "jazz", "join", "jolt", "jowl",
    "judo", "jugs", "jump", "junk", "jury", "keep", "keno", "kept",
    "keys", "kick", "kiln", "king", "kite", "kiwi", "knob", "lamb",
    "lava", "lazy", "leaf", "legs", "liar", "limp", "lion", "list",
    "logo", "loud", "love", "luau", "luck", "lung", "main", "many",
    "math", "maze", "memo", "menu", "meow", "mild", "mint", "miss",
    "monk", "nail", "navy", "need", "news", "next", "noon", "note",
    "numb", "obey", "oboe", "omit", "onyx", "open", "oval", "owls",
    "paid", "part", "peck", "play", "plus", "poem", "pool", "pose",
    "puff", "puma", "purr", "quad", "quiz", "race", "ramp", "real",
    "redo", "rich", "road", "rock", "roof", "ruby", "ruin", "runs",
    "rust", "safe", "saga", "scar", "sets", "silk", "skew", "slot",
    "soap", "solo", "song", "stub", "surf", "swan", "taco", "task",
    "taxi", "tent", "tied", "time", "tiny", "toil", "tomb", "toys",
    "trip", "tuna", "twin", "ugly", "undo", "unit", "urge", "user",
    "vast", "very", "veto", "vial", "vibe", "view", "visa", "void",
    "vows", "wall", "warm", "wasp", "wave", "waxy", "webs", "what",
    "when", "whiz", "wolf", "work", "yawn", "yell", "yoga", "yurt",
    "zaps", "zero", "zest", "zinc", "zone", "zany", "zulu", "zoom",
];

/// The two-letter minimal form (first and last letter) for each byte value,
/// in order.
#[rustfmt::skip]
pub const MINIMALS: [&str; 256] = [
    "ae", "ad", "ao", "ax", "aa", "ah", "am", "at",
    "ay", "as", "bk", "bd", "bn", "ba", "bs", "be",
    "by", "bg", "bw", "bb", "bz", "cm", "ch", "cs",
    "cf", "cy", "cw", "ce", "ca", "ck", "ct", "cx",
    "cl", "cp", "cn", "dk", "da", "ds", "di", "de",
    "dt", "dh", "db", "dn", "dw", "dp", "dm", "dl",
    "dy", "eh", "ey", "eo", "ee", "ec", "en", "em",
    "et", "es", "ft", "fr", "fn", "fs", "fm", "fh",
    "fz", "fp", "fw", "fx", "fy", "fe", "fg", "fl",
    "fd", "ga", "ge", "gr", "gs", "gt", "gl", "gw",
    "gd", "gy", "gm", "gu", "gh", "go", "hf", "hg",
    "hd", "hk", "ht", "hp", "hh", "hl", "hy", "he",
    "hn", "hs", "id", "ia", "ie", "ih", "iy", "io",
    "is", "in", "im", "je", "jz", "jn", "jt", "jl",
    "jo", "js", "jp", "jk", "jy", "kp", "ko", "kt",
    "ks", "kk", "kn", "kg", "ke", "ki", "kb", "lb",
    "la", "ly", "lf", "ls", "lr", "lp", "ln", "lt",
    "lo", "ld", "le", "lu", "lk", "lg", "mn", "my",
    "mh", "me", "mo", "mu", "mw", "md", "mt", "ms",
    "mk", "nl", "ny", "nd", "ns", "nt", "nn", "ne",
    "nb", "oy", "oe", "ot", "ox", "on", "ol", "os",
    "pd", "pt", "pk", "py", "ps", "pm", "pl", "pe",
    "pf", "pa", "pr", "qd", "qz", "re", "rp", "rl",
    "ro", "rh", "rd", "rk", "rf", "ry", "rn", "rs",
    "rt", "se", "sa", "sr", "ss", "sk", "sw", "st",
    "sp", "so", "sg", "sb", "sf", "sn", "to", "tk",
    "ti", "tt", "td", "te", "ty", "tl", "tb", "ts",
    "tp", "ta", "tn", "uy", "uo", "ut", "ue", "ur",
    "vt", "vy", "vo", "vl", "ve", "vw", "va", "vd",
    "vs", "wl", "wm", "wp", "we", "wy", "ws", "wt",
    "wn", "wz", "wf", "wk", "yn", "yl", "ya", "yt",
    "zs", "zo", "zt", "zc", "ze", "zy", "zu", "zm",
];

/// Maps full four-letter words to their byte value. Used by the Standard and
/// URI styles.
pub static WORD_IDXS: phf::Map<&'static str, u8> = phf::phf_map! {
    "able" => 0u8,
    "acid" => 1u8,
    "also" => 2u8,
    "apex" => 3u8,
    "aqua" => 4u8,
    "arch" => 5u8,
    "atom" => 6u8,
    "aunt" => 7u8,
    "away" => 8u8,
    "axis" => 9u8,
    "back" => 10u8,
    "bald" => 11u8,
    "barn" => 12u8,
    "beta" => 13u8,
    "bias" => 14u8,
    "blue" => 15u8,
    "body" => 16u8,
    "brag" => 17u8,
    "brew" => 18u8,
    "bulb" => 19u8,
    "buzz" => 20u8,
    "calm" => 21u8,
    "cash" => 22u8,
    "cats" => 23u8,
    "chef" => 24u8,
    "city" => 25u8,
    "claw" => 26u8,
    "code" => 27u8,
    "cola" => 28u8,
    "cook" => 29u8,
    "cost" => 30u8,
    "crux" => 31u8,
    "curl" => 32u8,
    "cusp" => 33u8,
    "cyan" => 34u8,
    "dark" => 35u8,
    "data" => 36u8,
    "days" => 37u8,
    "deli" => 38u8,
    "dice" => 39u8,
    "diet" => 40u8,
    "dish" => 41u8,
    "daub" => 42u8,
    "down" => 43u8,
    "draw" => 44u8,
    "drop" => 45u8,
    "drum" => 46u8,
    "dull" => 47u8,
    "duty" => 48u8,
    "each" => 49u8,
    "easy" => 50u8,
    "echo" => 51u8,
    "edge" => 52u8,
    "epic" => 53u8,
    "even" => 54u8,
    "exam" => 55u8,
    "exit" => 56u8,
    "eyes" => 57u8,
    "fact" => 58u8,
    "fair" => 59u8,
    "fern" => 60u8,
    "figs" => 61u8,
    "film" => 62u8,
    "fish" => 63u8,
    "fizz" => 64u8,
    "flap" => 65u8,
    "flew" => 66u8,
    "flux" => 67u8,
    "foxy" => 68u8,
    "free" => 69u8,
    "frog" => 70u8,
    "fuel" => 71u8,
    "fund" => 72u8,
    "gala" => 73u8,
    "game" => 74u8,
    "gear" => 75u8,
    "gems" => 76u8,
    "gift" => 77u8,
    "girl" => 78u8,
    "glow" => 79u8,
    "good" => 80u8,
    "gray" => 81u8,
    "grim" => 82u8,
    "guru" => 83u8,
    "gush" => 84u8,
    "gyro" => 85u8,
    "half" => 86u8,
    "hang" => 87u8,
    "hard" => 88u8,
    "hawk" => 89u8,
    "heat" => 90u8,
    "help" => 91u8,
    "high" => 92u8,
    "hill" => 93u8,
    "holy" => 94u8,
    "hope" => 95u8,
    "horn" => 96u8,
    "huts" => 97u8,
    "iced" => 98u8,
    "idea" => 99u8,
    "idle" => 100u8,
    "inch" => 101u8,
    "inky" => 102u8,
    "into" => 103u8,
    "iris" => 104u8,
    "iron" => 105u8,
    "item" => 106u8,
    "jade" => 107u8,
    "jazz" => 108u8,
    "join" => 109u8,
    "jolt" => 110u8,
    "jowl" => 111u8,
    "judo" => 112u8,
    "jugs" => 113u8,
    "jump" => 114u8,
    "junk" => 115u8,
    "jury" => 116u8,
    "keep" => 117u8,
    "keno" => 118u8,
    "kept" => 119u8,
    "keys" => 120u8,
    "kick" => 121u8,
    "kiln" => 122u8,
    "king" => 123u8,
    "kite" => 124u8,
    "kiwi" => 125u8,
    "knob" => 126u8,
    "lamb" => 127u8,
    "lava" => 128u8,
    "lazy" => 129u8,
    "leaf" => 130u8,
    "legs" => 131u8,
    "liar" => 132u8,
    "limp" => 133u8,
    "lion" => 134u8,
    "list" => 135u8,
    "logo" => 136u8,
    "loud" => 137u8,
    "love" => 138u8,
    "luau" => 139u8,
    "luck" => 140u8,
    "lung" => 141u8,
    "main" => 142u8,
    "many" => 143u8,
    "math" => 144u8,
    "maze" => 145u8,
    "memo" => 146u8,
    "menu" => 147u8,
    "meow" => 148u8,
    "mild" => 149u8,
    "mint" => 150u8,
    "miss" => 151u8,
    "monk" => 152u8,
    "nail" => 153u8,
    "navy" => 154u8,
    "need" => 155u8,
    "news" => 156u8,
    "next" => 157u8,
    "noon" => 158u8,
    "note" => 159u8,
    "numb" => 160u8,
    "obey" => 161u8,
    "oboe" => 162u8,
    "omit" => 163u8,
    "onyx" => 164u8,
    "open" => 165u8,
    "oval" => 166u8,
    "owls" => 167u8,
    "paid" => 168u8,
    "part" => 169u8,
    "peck" => 170u8,
    "play" => 171u8,
    "plus" => 172u8,
    "poem" => 173u8,
    "pool" => 174u8,
    "pose" => 175u8,
    "puff" => 176u8,
    "puma" => 177u8,
    "purr" => 178u8,
    "quad" => 179u8,
    "quiz" => 180u8,
    "race" => 181u8,
    "ramp" => 182u8,
    "real" => 183u8,
    "redo" => 184u8,
    "rich" => 185u8,
    "road" => 186u8,
    "rock" => 187u8,
    "roof" => 188u8,
    "ruby" => 189u8,
    "ruin" => 190u8,
    "runs" => 191u8,
    "rust" => 192u8,
    "safe" => 193u8,
    "saga" => 194u8,
    "scar" => 195u8,
    "sets" => 196u8,
    "silk" => 197u8,
    "skew" => 198u8,
    "slot" => 199u8,
    "soap" => 200u8,
    "solo" => 201u8,
    "song" => 202u8,
    "stub" => 203u8,
    "surf" => 204u8,
    "swan" => 205u8,
    "taco" => 206u8,
    "task" => 207u8,
    "taxi" => 208u8,
    "tent" => 209u8,
    "tied" => 210u8,
    "time" => 211u8,
    "tiny" => 212u8,
    "toil" => 213u8,
    "tomb" => 214u8,
    "toys" => 215u8,
    "trip" => 216u8,
    "tuna" => 217u8,
    "twin" => 218u8,
    "ugly" => 219u8,
    "undo" => 220u8,
    "unit" => 221u8,
    "urge" => 222u8,
    "user" => 223u8,
    "vast" => 224u8,
    "very" => 225u8,
    "veto" => 226u8,
    "vial" => 227u8,
    "vibe" => 228u8,
    "view" => 229u8,
    "visa" => 230u8,
    "void" => 231u8,
    "vows" => 232u8,
    "wall" => 233u8,
    "warm" => 234u8,
    "wasp" => 235u8,
    "wave" => 236u8,
    "waxy" => 237u8,
    "webs" => 238u8,
    "what" => 239u8,
    "when" => 240u8,
    "whiz" => 241u8,
    "wolf" => 242u8,
    "work" => 243u8,
    "yawn" => 244u8,
    "yell" => 245u8,
    "yoga" => 246u8,
    "yurt" => 247u8,
    "zaps" => 248u8,
    "zero" => 249u8,
    "zest" => 250u8,
    "zinc" => 251u8,
    "zone" => 252u8,
    "zany" => 253u8,
    "zulu" => 254u8,
    "zoom" => 255u8,
};

/// Maps two-letter minimal codes to their byte value. Used by the Minimal
/// style.
pub static MINIMAL_IDXS: phf::Map<&'static str, u8> = phf::phf_map! {
    "ae" => 0u8,
    "ad" => 1u8,
    "ao" => 2u8,
    "ax" => 3u8,
    "aa" => 4u8,
    "ah" => 5u8,
    "am" => 6u8,
    "at" => 7u8,
    "ay" => 8u8,
    "as" => 9u8,
    "bk" => 10u8,
    "bd" => 11u8,
    "bn" => 12u8,
    "ba" => 13u8,
    "bs" => 14u8,
    "be" => 15u8,
    "by" => 16u8,
    "bg" => 17u8,
    "bw" => 18u8,
    "bb" => 19u8,
    "bz" => 20u8,
    "cm" => 21u8,
    "ch" => 22u8,
    "cs" => 23u8,
    "cf" => 24u8,
    "cy" => 25u8,
    "cw" => 26u8,
    "ce" => 27u8,
    "ca" => 28u8,
    "ck" => 29u8,
    "ct" => 30u8,
    "cx" => 31u8,
    "cl" => 32u8,
    "cp" => 33u8,
    "cn" => 34u8,
    "dk" => 35u8,
    "da" => 36u8,
    "ds" => 37u8,
    "di" => 38u8,
    "de" => 39u8,
    "dt" => 40u8,
    "dh" => 41u8,
    "db" => 42u8,
    "dn" => 43u8,
    "dw" => 44u8,
    "dp" => 45u8,
    "dm" => 46u8,
    "dl" => 47u8,
    "dy" => 48u8,
    "eh" => 49u8,
    "ey" => 50u8,
    "eo" => 51u8,
    "ee" => 52u8,
    "ec" => 53u8,
    "en" => 54u8,
    "em" => 55u8,
    "et" => 56u8,
    "es" => 57u8,
    "ft" => 58u8,
    "fr" => 59u8,
    "fn" => 60u8,
    "fs" => 61u8,
    "fm" => 62u8,
    "fh" => 63u8,
    "fz" => 64u8,
    "fp" => 65u8,
    "fw" => 66u8,
    "fx" => 67u8,
    "fy" => 68u8,
    "fe" => 69u8,
    "fg" => 70u8,
    "fl" => 71u8,
    "fd" => 72u8,
    "ga" => 73u8,
    "ge" => 74u8,
    "gr" => 75u8,
    "gs" => 76u8,
    "gt" => 77u8,
    "gl" => 78u8,
    "gw" => 79u8,
    "gd" => 80u8,
    "gy" => 81u8,
    "gm" => 82u8,
    "gu" => 83u8,
    "gh" => 84u8,
    "go" => 85u8,
    "hf" => 86u8,
    "hg" => 87u8,
    "hd" => 88u8,
    "hk" => 89u8,
    "ht" => 90u8,
    "hp" => 91u8,
    "hh" => 92u8,
    "hl" => 93u8,
    "hy" => 94u8,
    "he" => 95u8,
    "hn" => 96u8,
    "hs" => 97u8,
    "id" => 98u8,
    "ia" => 99u8,
    "ie" => 100u8,
    "ih" => 101u8,
    "iy" => 102u8,
    "io" => 103u8,
    "is" => 104u8,
    "in" => 105u8,
    "im" => 106u8,
    "je" => 107u8,
    "jz" => 108u8,
    "jn" => 109u8,
    "jt" => 110u8,
    "jl" => 111u8,
    "jo" => 112u8,
    "js" => 113u8,
    "jp" => 114u8,
    "jk" => 115u8,
    "jy" => 116u8,
    "kp" => 117u8,
    "ko" => 118u8,
    "kt" => 119u8,
    "ks" => 120u8,
    "kk" => 121u8,
    "kn" => 122u8,
    "kg" => 123u8,
    "ke" => 124u8,
    "ki" => 125u8,
    "kb" => 126u8,
    "lb" => 127u8,
    "la" => 128u8,
    "ly" => 129u8,
    "lf" => 130u8,
    "ls" => 131u8,
    "lr" => 132u8,
    "lp" => 133u8,
    "ln" => 134u8,
    "lt" => 135u8,
    "lo" => 136u8,
    "ld" => 137u8,
    "le" => 138u8,
    "lu" => 139u8,
    "lk" => 140u8,
    "lg" => 141u8,
    "mn" => 142u8,
    "my" => 143u8,
    "mh" => 144u8,
    "me" => 145u8,
    "mo" => 146u8,
    "mu" => 147u8,
    "mw" => 148u8,
    "md" => 149u8,
    "mt" => 150u8,
    "ms" => 151u8,
    "mk" => 152u8,
    "nl" => 153u8,
    "ny" => 154u8,
    "nd" => 155u8,
    "ns" => 156u8,
    "nt" => 157u8,
    "nn" => 158u8,
    "ne" => 159u8,
    "nb" => 160u8,
    "oy" => 161u8,
    "oe" => 162u8,
    "ot" => 163u8,
    "ox" => 164u8,
    "on" => 165u8,
    "ol" => 166u8,
    "os" => 167u8,
    "pd" => 168u8,
    "pt" => 169u8,
    "pk" => 170u8,
    "py" => 171u8,
    "ps" => 172u8,
    "pm" => 173u8,
    "pl" => 174u8,
    "pe" => 175u8,
    "pf" => 176u8,
    "pa" => 177u8,
    "pr" => 178u8,
    "qd" => 179u8,
    "qz" => 180u8,
    "re" => 181u8,
    "rp" => 182u8,
    "rl" => 183u8,
    "ro" => 184u8,
    "rh" => 185u8,
    "rd" => 186u8,
    "rk" => 187u8,
    "rf" => 188u8,
    "ry" => 189u8,
    "rn" => 190u8,
    "rs" => 191u8,
    "rt" => 192u8,
    "se" => 193u8,
    "sa" => 194u8,
    "sr" => 195u8,
    "ss" => 196u8,
    "sk" => 197u8,
    "sw" => 198u8,
    "st" => 199u8,
    "sp" => 200u8,
    "so" => 201u8,
    "sg" => 202u8,
    "sb" => 203u8,
    "sf" => 204u8,
    "sn" => 205u8,
    "to" => 206u8,
    "tk" => 207u8,
    "ti" => 208u8,
    "tt" => 209u8,
    "td" => 210u8,
    "te" => 211u8,
    "ty" => 212u8,
    "tl" => 213u8,
    "tb" => 214u8,
    "ts" => 215u8,
    "tp" => 216u8,
    "ta" => 217u8,
    "tn" => 218u8,
    "uy" => 219u8,
    "uo" => 220u8,
    "ut" => 221u8,
    "ue" => 222u8,
    "ur" => 223u8,
    "vt" => 224u8,
    "vy" => 225u8,
    "vo" => 226u8,
    "vl" => 227u8,
    "ve" => 228u8,
    "vw" => 229u8,
    "va" => 230u8,
    "vd" => 231u8,
    "vs" => 232u8,
    "wl" => 233u8,
    "wm" => 234u8,
    "wp" => 235u8,
    "we" => 236u8,
    "wy" => 237u8,
    "ws" => 238u8,
    "wt" => 239u8,
    "wn" => 240u8,
    "wz" => 241u8,
    "wf" => 242u8,
    "wk" => 243u8,
    "yn" => 244u8,
    "yl" => 245u8,
    "ya" => 246u8,
    "yt" => 247u8,
    "zs" => 248u8,
    "zo" => 249u8,
    "zt" => 250u8,
    "zc" => 251u8,
    "ze" => 252u8,
    "zy" => 253u8,
    "zu" => 254u8,
    "zm" => 255u8,
};
