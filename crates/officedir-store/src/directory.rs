// SPDX-License-Identifier: Apache-2.0

use crate::collection::JsonCollection;
use crate::insights::InsightLibrary;
use crate::{StoreError, StoreErrorCode};
use officedir_calc::LeadRecord;
use officedir_model::{
    BlogPost, Building, Company, CoworkingSpace, MapMarker, ReferenceBook, Submarket,
};
use std::path::{Path, PathBuf};

pub const COMPANIES: &str = "companies";
pub const COWORKING: &str = "coworking";
pub const BUILDINGS: &str = "buildings";
pub const SUBMARKETS: &str = "submarkets";
pub const REFERENCES: &str = "references";
pub const BLOG_POSTS: &str = "blog-posts";
pub const LEADS: &str = "leads";

/// Which collection feeds the map-marker endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MarkerSource {
    Buildings,
    Companies,
    Coworking,
    Submarkets,
}

impl MarkerSource {
    pub const ALL: [MarkerSource; 4] = [
        Self::Buildings,
        Self::Companies,
        Self::Coworking,
        Self::Submarkets,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::Companies => "companies",
            Self::Coworking => "coworking",
            Self::Submarkets => "submarkets",
        }
    }

    pub fn parse(input: &str) -> Result<Self, StoreError> {
        match input {
            "buildings" => Ok(Self::Buildings),
            "companies" => Ok(Self::Companies),
            "coworking" => Ok(Self::Coworking),
            "submarkets" => Ok(Self::Submarkets),
            other => Err(StoreError::new(
                StoreErrorCode::Validation,
                format!("unknown marker source: {other}"),
            )),
        }
    }
}

/// Typed access to every collection under one data root.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn collection(&self, name: &str) -> JsonCollection {
        JsonCollection::new(self.root.clone(), name)
    }

    #[must_use]
    pub fn insights(&self) -> InsightLibrary {
        InsightLibrary::new(&self.root)
    }

    #[must_use]
    pub fn buildings(&self) -> Vec<Building> {
        self.collection(BUILDINGS).read()
    }

    #[must_use]
    pub fn building(&self, slug: &str) -> Option<Building> {
        self.buildings().into_iter().find(|b| b.id.as_str() == slug)
    }

    #[must_use]
    pub fn submarkets(&self) -> Vec<Submarket> {
        self.collection(SUBMARKETS).read()
    }

    #[must_use]
    pub fn submarket(&self, id: &str) -> Option<Submarket> {
        self.submarkets().into_iter().find(|s| s.id.as_str() == id)
    }

    /// Buildings grouped under a submarket by label match. A submarket
    /// with no building filter yields an empty list.
    #[must_use]
    pub fn buildings_in_submarket(&self, submarket: &Submarket) -> Vec<Building> {
        self.buildings()
            .into_iter()
            .filter(|b| submarket.matches_building(b.submarket.as_deref()))
            .collect()
    }

    #[must_use]
    pub fn coworking_spaces(&self) -> Vec<CoworkingSpace> {
        self.collection(COWORKING).read()
    }

    #[must_use]
    pub fn coworking_space(&self, slug: &str) -> Option<CoworkingSpace> {
        self.coworking_spaces()
            .into_iter()
            .find(|s| s.id.as_str() == slug)
    }

    #[must_use]
    pub fn coworking_in_submarket(&self, submarket: &Submarket) -> Vec<CoworkingSpace> {
        self.coworking_spaces()
            .into_iter()
            .filter(|s| submarket.matches_coworking(s.submarket.as_deref()))
            .collect()
    }

    #[must_use]
    pub fn companies(&self) -> Vec<Company> {
        self.collection(COMPANIES).read()
    }

    pub fn add_company(&self, company: Company) -> Result<Company, StoreError> {
        let stored = company.clone();
        self.collection(COMPANIES).append(company)?;
        Ok(stored)
    }

    #[must_use]
    pub fn references(&self) -> ReferenceBook {
        self.collection(REFERENCES).read_object()
    }

    #[must_use]
    pub fn posts(&self) -> Vec<BlogPost> {
        self.collection(BLOG_POSTS).read()
    }

    /// Upsert by id: replace in place when the id exists, otherwise
    /// prepend so the dashboard lists newest first.
    pub fn upsert_post(&self, post: BlogPost) -> Result<BlogPost, StoreError> {
        let stored = post.clone();
        self.collection(BLOG_POSTS)
            .mutate(|posts: &mut Vec<BlogPost>| {
                match posts.iter().position(|p| p.id == post.id) {
                    Some(idx) => posts[idx] = post,
                    None => posts.insert(0, post),
                }
            })?;
        Ok(stored)
    }

    /// Remove by id. Removing an absent id is not an error.
    pub fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        self.collection(BLOG_POSTS)
            .mutate(|posts: &mut Vec<BlogPost>| posts.retain(|p| p.id != id))
    }

    pub fn add_lead(&self, lead: LeadRecord) -> Result<(), StoreError> {
        self.collection(LEADS).append(lead)
    }

    #[must_use]
    pub fn leads(&self) -> Vec<LeadRecord> {
        self.collection(LEADS).read()
    }

    /// Markers for the embedded map, one source collection at a time.
    /// Records without valid numeric coordinates are dropped.
    #[must_use]
    pub fn markers(&self, source: MarkerSource) -> Vec<MapMarker> {
        match source {
            MarkerSource::Buildings => self
                .buildings()
                .iter()
                .filter_map(Building::marker)
                .collect(),
            MarkerSource::Companies => self
                .companies()
                .iter()
                .filter_map(Company::marker)
                .collect(),
            MarkerSource::Coworking => self
                .coworking_spaces()
                .iter()
                .filter_map(CoworkingSpace::marker)
                .collect(),
            MarkerSource::Submarkets => {
                self.submarkets().iter().map(Submarket::marker).collect()
            }
        }
    }
}
