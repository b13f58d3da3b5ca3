use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    sync::Arc,
};
use thiserror::Error;
use tracing::{debug, warn};

mod models;
pub use models::*;

use crate::shared;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Airport list entry {0} has a code but no name")]
    MissingName(String),
    #[error("Airport list entry {0} has an empty code")]
    EmptyCode(String),
    #[error("Unsupported airport list format: {0}")]
    UnsupportedFormat(String),
}

/// The static list of airports a user can pick from.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    airports: Box<[Airport]>,
    code_lookup: Arc<HashMap<Arc<str>, usize>>,
}

impl AirportDirectory {
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        let mut code_lookup = HashMap::with_capacity(airports.len());
        for (i, airport) in airports.iter().enumerate() {
            if code_lookup.insert(airport.code.clone(), i).is_some() {
                warn!("Duplicate airport code {}, keeping the last entry", airport.code);
            }
        }
        Self {
            airports: airports.into(),
            code_lookup: code_lookup.into(),
        }
    }

    /// Picks the loader from the file extension, `.json` or `.csv`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_path(path),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::from_csv_path(path),
            _ => Err(self::Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, self::Error> {
        let columns: AirportColumns = serde_json::from_reader(reader)?;
        let mut keys: Vec<&String> = columns.code.keys().collect();
        // Integer keys first in numeric order, then the rest lexically.
        keys.sort_by_cached_key(|key| {
            let index = key.parse::<u64>().ok();
            (index.is_none(), index, key.to_string())
        });

        let mut airports = Vec::with_capacity(keys.len());
        for key in keys {
            let code = &columns.code[key];
            let name = columns
                .name
                .get(key)
                .ok_or_else(|| self::Error::MissingName(key.clone()))?;
            airports.push(parse_airport(key, code, name)?);
        }
        debug!("Loaded {} airports from json", airports.len());
        Ok(Self::from_airports(airports))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, self::Error> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, self::Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut airports = Vec::new();
        for (i, record) in reader.deserialize::<AirportRecord>().enumerate() {
            let record = record?;
            airports.push(parse_airport(&i.to_string(), &record.code, &record.name)?);
        }
        debug!("Loaded {} airports from csv", airports.len());
        Ok(Self::from_airports(airports))
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn by_code(&self, code: &str) -> Option<&Airport> {
        let code = code.trim().to_uppercase();
        self.code_lookup
            .get(code.as_str())
            .map(|&index| &self.airports[index])
    }

    /// An exact code match comes first, followed by fuzzy name matches.
    pub fn search(&self, query: &str) -> Vec<&Airport> {
        let exact = self.by_code(query);
        let mut results: Vec<&Airport> = exact.into_iter().collect();
        results.extend(
            shared::search(query, &self.airports)
                .into_iter()
                .filter(|airport| exact.is_none_or(|exact| exact.code != airport.code)),
        );
        results
    }
}

fn parse_airport(key: &str, code: &str, name: &str) -> Result<Airport, self::Error> {
    if code.trim().is_empty() {
        return Err(self::Error::EmptyCode(key.to_string()));
    }
    Ok(Airport::new(code, name))
}
