//! Set name to set code lookup.
//!
//! Decklists in the wild name editions either by their three-letter code
//! (`M10`) or by their printed name (`Magic 2010`). Both are folded into the
//! lower-case code so the two spellings compare equal.

use lazy_static::lazy_static;
use std::collections::HashMap;

const SET_NAMES: &[(&str, &str)] = &[
    // Core sets
    ("limited edition alpha", "lea"),
    ("limited edition beta", "leb"),
    ("unlimited edition", "2ed"),
    ("revised edition", "3ed"),
    ("fourth edition", "4ed"),
    ("fifth edition", "5ed"),
    ("classic sixth edition", "6ed"),
    ("seventh edition", "7ed"),
    ("eighth edition", "8ed"),
    ("ninth edition", "9ed"),
    ("tenth edition", "10e"),
    ("magic 2010", "m10"),
    ("magic 2011", "m11"),
    ("magic 2012", "m12"),
    ("magic 2013 core set", "m13"),
    ("magic 2014 core set", "m14"),
    ("magic 2015 core set", "m15"),
    ("magic origins", "ori"),
    // Expansions
    ("arabian nights", "arn"),
    ("antiquities", "atq"),
    ("legends", "leg"),
    ("the dark", "drk"),
    ("fallen empires", "fem"),
    ("homelands", "hml"),
    ("ice age", "ice"),
    ("alliances", "all"),
    ("coldsnap", "csp"),
    ("mirage", "mir"),
    ("visions", "vis"),
    ("weatherlight", "wth"),
    ("tempest", "tmp"),
    ("stronghold", "sth"),
    ("exodus", "exo"),
    ("urza's saga", "usg"),
    ("urza's legacy", "ulg"),
    ("urza's destiny", "uds"),
    ("mercadian masques", "mmq"),
    ("nemesis", "nem"),
    ("prophecy", "pcy"),
    ("invasion", "inv"),
    ("planeshift", "pls"),
    ("apocalypse", "apc"),
    ("odyssey", "ody"),
    ("torment", "tor"),
    ("judgment", "jud"),
    ("onslaught", "ons"),
    ("legions", "lgn"),
    ("scourge", "scg"),
    ("mirrodin", "mrd"),
    ("darksteel", "dst"),
    ("fifth dawn", "5dn"),
    ("champions of kamigawa", "chk"),
    ("betrayers of kamigawa", "bok"),
    ("saviors of kamigawa", "sok"),
    ("ravnica: city of guilds", "rav"),
    ("guildpact", "gpt"),
    ("dissension", "dis"),
    ("time spiral", "tsp"),
    ("planar chaos", "plc"),
    ("future sight", "fut"),
    ("lorwyn", "lrw"),
    ("morningtide", "mor"),
    ("shadowmoor", "shm"),
    ("eventide", "eve"),
    ("shards of alara", "ala"),
    ("conflux", "con"),
    ("alara reborn", "arb"),
    ("zendikar", "zen"),
    ("worldwake", "wwk"),
    ("rise of the eldrazi", "roe"),
    ("scars of mirrodin", "som"),
    ("mirrodin besieged", "mbs"),
    ("new phyrexia", "nph"),
    ("innistrad", "isd"),
    ("dark ascension", "dka"),
    ("avacyn restored", "avr"),
    ("return to ravnica", "rtr"),
    ("gatecrash", "gtc"),
    ("dragon's maze", "dgm"),
    ("theros", "ths"),
    ("born of the gods", "bng"),
    ("journey into nyx", "jou"),
    ("khans of tarkir", "ktk"),
    ("fate reforged", "frf"),
    ("dragons of tarkir", "dtk"),
    ("battle for zendikar", "bfz"),
    ("oath of the gatewatch", "ogw"),
    ("shadows over innistrad", "soi"),
    ("eldritch moon", "emn"),
    ("kaladesh", "kld"),
    ("aether revolt", "aer"),
    ("amonkhet", "akh"),
    ("hour of devastation", "hou"),
    // Reprint and special sets
    ("chronicles", "chr"),
    ("anthologies", "ath"),
    ("battle royale box set", "brb"),
    ("beatdown box set", "btd"),
    ("deckmasters: garfield vs. finkel", "dkm"),
    ("eternal masters", "ema"),
    ("duel decks: elves vs. goblins", "evg"),
    ("duel decks: jace vs. chandra", "dd2"),
    ("duel decks: divine vs. demonic", "ddc"),
    ("duel decks: garruk vs. liliana", "ddd"),
    ("duel decks: phyrexia vs. the coalition", "dde"),
    ("duel decks: elspeth vs. tezzeret", "ddf"),
    ("duel decks: knights vs. dragons", "ddg"),
    ("duel decks: ajani vs. nicol bolas", "ddh"),
    ("duel decks: venser vs. koth", "ddi"),
    ("duel decks: izzet vs. golgari", "ddj"),
    ("duel decks: sorin vs. tibalt", "ddk"),
    ("duel decks: heroes vs. monsters", "ddl"),
    ("duel decks: jace vs. vraska", "ddm"),
    ("duel decks: speed vs. cunning", "ddn"),
    ("duel decks anthology", "dd3"),
    ("duel decks: elspeth vs. kiora", "ddo"),
    ("duel decks: zendikar vs. eldrazi", "ddp"),
    ("duel decks: blessed vs. cursed", "ddq"),
    ("duel decks: nissa vs. ob nixilis", "ddr"),
    ("duel decks: mind vs. might", "dds"),
    ("from the vault: dragons", "drb"),
    ("from the vault: exiled", "v09"),
    ("from the vault: relics", "v10"),
    ("from the vault: legends", "v11"),
    ("from the vault: realms", "v12"),
    ("from the vault: twenty", "v13"),
    ("from the vault: annihilation", "v14"),
    ("from the vault: angels", "v15"),
    ("from the vault: lore", "v16"),
    ("premium deck series: slivers", "h09"),
    ("premium deck series: fire and lightning", "pd2"),
    ("premium deck series: graveborn", "pd3"),
    ("modern masters", "mma"),
    ("modern masters 2015 edition", "mm2"),
    ("modern masters 2017 edition", "mm3"),
    ("modern event deck 2014", "md1"),
    ("planechase", "hop"),
    ("planechase 2012 edition", "pc2"),
    ("planechase anthology", "pca"),
    ("archenemy", "arc"),
    ("commander", "cmd"),
    ("commander's arsenal", "cm1"),
    ("commander 2013 edition", "c13"),
    ("commander 2014", "c14"),
    ("commander 2015", "c15"),
    ("commander 2016", "c16"),
    ("commander anthology", "cma"),
    ("conspiracy", "cns"),
    ("conspiracy: take the crown", "cn2"),
    ("portal", "por"),
    ("portal second age", "po2"),
    ("portal three kingdoms", "ptk"),
    ("starter 1999", "s99"),
    ("starter 2000", "s00"),
    ("collector's edition", "ced"),
    ("international collector's edition", "cei"),
    ("unglued", "ugl"),
    ("unhinged", "unh"),
];

const SYNONYMS: &[(&str, &str)] = &[
    ("alpha", "lea"),
    ("beta", "leb"),
    ("revised", "3ed"),
    ("third edition", "3ed"),
    ("3rd edition", "3ed"),
    ("4th edition", "4ed"),
    ("5th edition", "5ed"),
    ("sixth edition", "6ed"),
    ("6th edition", "6ed"),
    ("7th edition", "7ed"),
    ("8th edition", "8ed"),
    ("9th edition", "9ed"),
    ("10th edition", "10e"),
    ("magic 2013", "m13"),
    ("magic 2014", "m14"),
    ("magic 2015", "m15"),
    ("ravnica", "rav"),
    ("origins", "ori"),
];

lazy_static! {
    static ref SET_CODES: HashMap<String, &'static str> = build_table();
}

fn build_table() -> HashMap<String, &'static str> {
    let mut table: HashMap<String, &'static str> = HashMap::new();

    for &(name, code) in SET_NAMES.iter().chain(SYNONYMS.iter()) {
        table.insert(name.to_string(), code);

        // "Unlimited Edition" is also written "Unlimited"
        if let Some(short) = name.strip_suffix(" edition") {
            if !short.is_empty() {
                table.entry(short.to_string()).or_insert(code);
            }
        }
        if let Some(rest) = name.strip_prefix("duel decks: ") {
            table.entry(rest.to_string()).or_insert(code);
        } else if let Some(rest) = name.strip_prefix("from the vault: ") {
            table.entry(format!("ftv: {rest}")).or_insert(code);
        }
    }

    table
}

/// Look up the set code for a printed set name, if the name is known.
fn set_code(name: &str) -> Option<&'static str> {
    SET_CODES.get(&name.trim().to_lowercase()).copied()
}

/// Normalize an edition string to its set code.
///
/// Known set names map to their code; anything else is returned lower-cased
/// and trimmed, so unknown codes still compare case-insensitively.
pub fn normalize_edition(edition: &str) -> String {
    match set_code(edition) {
        Some(code) => code.to_string(),
        None => edition.trim().to_lowercase(),
    }
}
