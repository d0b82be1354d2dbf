use std::{cmp::Ordering, fmt, io::Write};

use anyhow::Result;
use clap::Parser;
use dictlite::Dictlite;
use tracing::{debug, instrument, Level};

const DRUGS: [&str; 10] = [
    "ACE Inhibitor",
    "Amphoceterin B",
    "Antibiotics",
    "Antiepileptics",
    "Benzodiazepines",
    "Beta Blockers",
    "Bisphosphonates",
    "Tricyclic Antidepressants",
    "Typical Antipsychotics",
    "Warfarin",
];

const CONDITIONS: [&str; 10] = [
    "Angioedema",
    "Acute renal failure",
    "Acute liver failure",
    "Aplastic anemia",
    "Hip fracture",
    "None",
    "Upper GI ulcer",
    "Acute myocardial infarction",
    "Acute myocardial infarction",
    "Bleeding",
];

const IDS: [i32; 5] = [7, 92, 435, 9338, 12252];

const CITIES: [&str; 5] = ["Rome", "Calcutta", "Sao Paulo", "Istanbul", "Tbilisi"];

const SONGS: [(&str, &str); 6] = [
    ("song: 1901", "album: Wolfgang Amadeus Phoenix"),
    ("song: Lisztomania", "album: Wolfgang Amadeus Phoenix"),
    ("album: Wolfgang Amadeus Phoenix", "band: Phoenix"),
    ("song: Long Distance Call", "album: It's Never Been Like That"),
    ("song: Sometimes In The Fall", "album: It's Never Been Like That"),
    ("album: It's Never Been Like That", "band: Phoenix"),
];

/// An integer key that is only ever compared through its comparator.
///
struct BoxInt {
    value: i32,
}

impl fmt::Debug for BoxInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

fn compare_box_ints(a: &BoxInt, b: &BoxInt) -> Ordering {
    a.value.cmp(&b.value)
}

/// Walk through the dictionary operations on a few sample dictionaries
///
#[derive(Clone, Debug, PartialEq, Parser)]
pub struct DemoArgs {}

impl DemoArgs {
    #[instrument(skip_all, err(level = Level::ERROR))]
    pub(super) fn execute(self, out: &mut dyn Write) -> Result<()> {
        let mut drugs: Dictlite<&str, &str> = DRUGS.into_iter().zip(CONDITIONS).collect();
        let mut cities = Dictlite::with_comparator(compare_box_ints);
        for (value, city) in IDS.into_iter().zip(CITIES) {
            cities.insert(BoxInt { value }, city);
        }
        let mut songs: Dictlite<&str, &str> = SONGS.into_iter().collect();
        debug!(
            drugs = drugs.len(),
            cities = cities.len(),
            songs = songs.len(),
            "Populated sample dictionaries"
        );

        writeln!(out, "{drugs}\n")?;

        let key = "Rofecoxib";
        writeln!(out, "contains {key:?}?: {}", drugs.contains_key(&key))?;
        drugs.insert(key, "None");
        writeln!(out, "contains {key:?}?: {}", drugs.contains_key(&key))?;
        drugs.insert("ACE Inhibitor", "Bleeding");
        writeln!(out)?;

        writeln!(out, "{drugs}\n")?;
        writeln!(out, "{cities}\n")?;

        let lookups = [7, 12252, 39912].map(|value| BoxInt { value });
        for key in &lookups {
            write_lookup(out, &cities, key)?;
        }
        let [_, _, missing] = lookups;
        cities.insert(missing, "Beijing");
        write_lookup(out, &cities, &BoxInt { value: 39912 })?;
        writeln!(out)?;

        writeln!(out, "{cities}\n")?;

        writeln!(out, "{songs}\n")?;
        songs.extend_from(&drugs);
        writeln!(out, "{songs}\n")?;
        writeln!(out, "{drugs}\n")?;
        Ok(())
    }
}

fn write_lookup<C>(
    out: &mut dyn Write,
    cities: &Dictlite<BoxInt, &str, C>,
    key: &BoxInt,
) -> Result<()>
where
    C: ::dictlite::KeyComparator<BoxInt>,
{
    let value = match cities.get(key) {
        Some(city) => format!("{city:?}"),
        None => "<none>".into(),
    };
    writeln!(
        out,
        "contains {key:?}?: {}; value: {value}",
        cities.contains_key(key),
    )
    .map_err(Into::into)
}
