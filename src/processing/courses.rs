//! Course catalogs and random course recommendation

use crate::processing::field::{classify_track, Track};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub url: String,
}

impl Course {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Per-track course lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseCatalogs {
    pub data_science: Vec<Course>,
    pub web: Vec<Course>,
    pub android: Vec<Course>,
    pub ios: Vec<Course>,
    pub uiux: Vec<Course>,
}

impl CourseCatalogs {
    /// Catalog backing `track`; general upskilling falls back to data science.
    pub fn catalog_for(&self, track: Track) -> &[Course] {
        match track {
            Track::DataScience | Track::GeneralUpskilling => &self.data_science,
            Track::WebDevelopment => &self.web,
            Track::AndroidDevelopment => &self.android,
            Track::IosDevelopment => &self.ios,
            Track::UiUxDesign => &self.uiux,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecommendation {
    pub track: Track,
    pub courses: Vec<Course>,
}

/// Up to `count` courses from `catalog`, sampled without replacement.
pub fn recommend_courses<R: Rng + ?Sized>(catalog: &[Course], count: usize, rng: &mut R) -> Vec<Course> {
    let mut shuffled = catalog.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Classify `skills` and sample courses for the resulting track.
pub fn recommend_for_skills<R: Rng + ?Sized>(
    skills: &[String],
    catalogs: &CourseCatalogs,
    count: usize,
    rng: &mut R,
) -> FieldRecommendation {
    let track = classify_track(skills);
    FieldRecommendation {
        track,
        courses: recommend_courses(catalogs.catalog_for(track), count, rng),
    }
}
