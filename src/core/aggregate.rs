//! Corpus-wide statistics and frequency tables.
//!
//! Everything is computed in one walk over the [`Corpus`] (see [`aggregate`]).
//!
//! # Tie-breaking
//!
//! Counts are kept in first-seen order and ranked with a stable sort, so
//! among keys with equal counts the one that appears first in the transcript
//! ranks first. This applies to the top sender, busiest hour, and the word and
//! glyph tables. The busiest day is the earliest date with the highest count.
//!
//! # Rounding
//!
//! The mean word count is rounded to one decimal with round-half-to-even,
//! computed exactly on the integer totals: 1.25 becomes 1.2 and 1.75
//! becomes 1.8.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use chrono::{NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use super::models::{Corpus, WEEK, weekday_name};
use crate::config::AnalyzerConfig;

const DISPLAY_DATE: &str = "%d/%m/%Y";

/// Counter that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Hash + Eq + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Counts one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// All keys by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` highest-ranked keys.
    pub fn most_common(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// The highest-ranked key.
    pub fn top(&self) -> Option<(K, usize)> {
        self.entries
            .iter()
            .fold(None::<&(K, usize)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .cloned()
    }
}

impl<K: Hash + Eq + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounds `total / count` to one decimal, half to even.
///
/// ```rust
/// use chatlens::core::aggregate::mean_tenths_half_even;
///
/// assert_eq!(mean_tenths_half_even(3, 2), 1.5);
/// assert_eq!(mean_tenths_half_even(5, 4), 1.2);
/// assert_eq!(mean_tenths_half_even(7, 4), 1.8);
/// ```
pub fn mean_tenths_half_even(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let scaled = total * 10;
    let (quotient, remainder) = (scaled / count, scaled % count);
    let tenths = match (2 * remainder).cmp(&count) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };
    tenths as f64 / 10.0
}

/// Summary statistics for one transcript.
///
/// Serializes to a flat object keyed by display names (`total_mensajes`,
/// `usuario_activo`, ...), with dates rendered `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStats {
    pub total_messages: usize,
    pub total_senders: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub top_sender: String,
    pub top_sender_count: usize,
    pub busiest_day: NaiveDate,
    pub busiest_day_count: usize,
    pub busiest_hour: u32,
    pub total_glyphs: usize,
    /// Mean words per message, rounded half-to-even to one decimal.
    pub mean_words: f64,
}

impl AggregateStats {
    /// Computes statistics for `corpus`, or `None` if it is empty.
    pub fn compute(corpus: &Corpus) -> Option<Self> {
        Tally::from_corpus(corpus).stats()
    }

    /// Date range as `DD/MM/YYYY - DD/MM/YYYY`.
    pub fn period(&self) -> String {
        format!(
            "{} - {}",
            self.first_date.format(DISPLAY_DATE),
            self.last_date.format(DISPLAY_DATE)
        )
    }

    /// The statistics as `(name, value)` pairs, in display order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_mensajes", self.total_messages.to_string()),
            ("total_usuarios", self.total_senders.to_string()),
            ("periodo", self.period()),
            ("usuario_activo", self.top_sender.clone()),
            ("mensajes_usuario_activo", self.top_sender_count.to_string()),
            ("dia_activo", self.busiest_day.format(DISPLAY_DATE).to_string()),
            ("mensajes_dia_activo", self.busiest_day_count.to_string()),
            ("hora_activa", self.busiest_hour.to_string()),
            ("total_emojis", self.total_glyphs.to_string()),
            ("promedio_palabras", format!("{:.1}", self.mean_words)),
        ]
    }
}

#[derive(Serialize)]
struct FlatStats<'a> {
    total_mensajes: usize,
    total_usuarios: usize,
    periodo: String,
    usuario_activo: &'a str,
    mensajes_usuario_activo: usize,
    dia_activo: String,
    mensajes_dia_activo: usize,
    hora_activa: u32,
    total_emojis: usize,
    promedio_palabras: f64,
}

impl<'a> FlatStats<'a> {
    fn from_stats(stats: &'a AggregateStats) -> Self {
        Self {
            total_mensajes: stats.total_messages,
            total_usuarios: stats.total_senders,
            periodo: stats.period(),
            usuario_activo: &stats.top_sender,
            mensajes_usuario_activo: stats.top_sender_count,
            dia_activo: stats.busiest_day.format(DISPLAY_DATE).to_string(),
            mensajes_dia_activo: stats.busiest_day_count,
            hora_activa: stats.busiest_hour,
            total_emojis: stats.total_glyphs,
            promedio_palabras: stats.mean_words,
        }
    }
}

impl Serialize for AggregateStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatStats::from_stats(self).serialize(serializer)
    }
}

/// Frequency tables for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distributions {
    /// Every sender, most active first.
    pub senders: Vec<(String, usize)>,
    /// Monday through Sunday, zero-filled.
    pub weekdays: Vec<(&'static str, usize)>,
    /// Hours that occur in the corpus, ascending.
    pub hours: Vec<(u32, usize)>,
    /// Most frequent cleaned words.
    pub words: Vec<(String, usize)>,
    /// Most frequent glyphs.
    pub glyphs: Vec<(char, usize)>,
    /// Messages per calendar day, ascending by date.
    pub daily: Vec<(NaiveDate, usize)>,
    /// Mean messages per active day.
    pub daily_mean: f64,
    /// `daily_mean` truncated to an integer.
    pub daily_baseline: usize,
}

impl Distributions {
    /// Builds the tables, keeping `top_words` words and `top_glyphs` glyphs.
    pub fn compute(corpus: &Corpus, top_words: usize, top_glyphs: usize) -> Self {
        Tally::from_corpus(corpus).distributions(top_words, top_glyphs)
    }
}

/// Computes statistics and tables in a single pass.
///
/// Returns `None` for an empty corpus.
pub fn aggregate(corpus: &Corpus, config: &AnalyzerConfig) -> Option<(AggregateStats, Distributions)> {
    let tally = Tally::from_corpus(corpus);
    let stats = tally.stats()?;
    Some((stats, tally.distributions(config.top_words, config.top_glyphs)))
}

/// Running counts gathered from one walk over the corpus.
struct Tally<'a> {
    messages: usize,
    words_total: usize,
    senders: FrequencyTable<&'a str>,
    hours: FrequencyTable<u32>,
    weekdays: [usize; 7],
    daily: BTreeMap<NaiveDate, usize>,
    words: FrequencyTable<&'a str>,
    glyphs: FrequencyTable<char>,
}

impl<'a> Tally<'a> {
    fn from_corpus(corpus: &'a Corpus) -> Self {
        let mut tally = Tally {
            messages: 0,
            words_total: 0,
            senders: FrequencyTable::new(),
            hours: FrequencyTable::new(),
            weekdays: [0; 7],
            daily: BTreeMap::new(),
            words: FrequencyTable::new(),
            glyphs: FrequencyTable::new(),
        };

        for record in corpus {
            tally.messages += 1;
            tally.words_total += record.word_count;
            tally.senders.add(record.sender());
            tally.hours.add(record.hour);
            tally.weekdays[weekday_slot(record.weekday)] += 1;
            *tally.daily.entry(record.date()).or_insert(0) += 1;
            for word in record.clean_text.split_whitespace() {
                tally.words.add(word);
            }
            for &glyph in &record.glyphs {
                tally.glyphs.add(glyph);
            }
        }

        tally
    }

    fn stats(&self) -> Option<AggregateStats> {
        let (&first_date, _) = self.daily.first_key_value()?;
        let (&last_date, _) = self.daily.last_key_value()?;
        let (top_sender, top_sender_count) = self.senders.top()?;
        let (busiest_hour, _) = self.hours.top()?;
        let (busiest_day, busiest_day_count) = self.busiest_day()?;

        Some(AggregateStats {
            total_messages: self.messages,
            total_senders: self.senders.len(),
            first_date,
            last_date,
            top_sender: top_sender.to_string(),
            top_sender_count,
            busiest_day,
            busiest_day_count,
            busiest_hour,
            total_glyphs: self.glyphs.total(),
            mean_words: mean_tenths_half_even(self.words_total, self.messages),
        })
    }

    fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.daily
            .iter()
            .fold(None::<(NaiveDate, usize)>, |best, (&day, &count)| match best {
                Some(b) if b.1 >= count => Some(b),
                _ => Some((day, count)),
            })
    }

    fn distributions(&self, top_words: usize, top_glyphs: usize) -> Distributions {
        let daily: Vec<(NaiveDate, usize)> = self.daily.iter().map(|(&d, &n)| (d, n)).collect();
        let daily_mean = if daily.is_empty() {
            0.0
        } else {
            self.messages as f64 / daily.len() as f64
        };

        Distributions {
            senders: self
                .senders
                .ranked()
                .into_iter()
                .map(|(s, n)| (s.to_string(), n))
                .collect(),
            weekdays: WEEK
                .iter()
                .zip(self.weekdays)
                .map(|(&day, n)| (weekday_name(day), n))
                .collect(),
            hours: {
                let mut hours = self.hours.ranked();
                hours.sort_by_key(|&(h, _)| h);
                hours
            },
            words: self
                .words
                .most_common(top_words)
                .into_iter()
                .map(|(w, n)| (w.to_string(), n))
                .collect(),
            glyphs: self.glyphs.most_common(top_glyphs),
            daily_baseline: daily_mean as usize,
            daily_mean,
            daily,
        }
    }
}

fn weekday_slot(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}
