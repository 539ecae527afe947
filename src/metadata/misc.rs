use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::macros::text_accessors;
use super::{Datestamp, MultiString};

/// Dataset-level information that does not belong to another section
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MiscInfo {
    dataset_id: String,
    dataset_name: String,
    section_name: String,
    funding_agency: String,
    funding_title: String,
    funding_id: String,
    research_project: String,
    dataset_doi: String,
    access_id: String,
    website: String,
    download_url: String,
    citation: String,
    synopsis: String,
    purpose: String,
    references: MultiString,
    ports_of_call: MultiString,
    addn_info: MultiString,
    start_datestamp: Datestamp,
    end_datestamp: Datestamp,
    history: Vec<Datestamp>,
}

impl MiscInfo {
    /// Create with every field empty and unset cruise dates
    pub fn new() -> Self {
        Self::default()
    }

    text_accessors! {
        dataset_id, set_dataset_id => "dataset identifier (expocode)";
        dataset_name, set_dataset_name => "dataset (cruise) name";
        section_name, set_section_name => "section name";
        funding_agency, set_funding_agency => "funding agency";
        funding_title, set_funding_title => "title of the funding grant";
        funding_id, set_funding_id => "identifier of the funding grant";
        research_project, set_research_project => "research project name";
        dataset_doi, set_dataset_doi => "DOI of the dataset";
        access_id, set_access_id => "accession identifier of the dataset";
        website, set_website => "URL of the dataset landing page";
        download_url, set_download_url => "URL for downloading the data";
        citation, set_citation => "citation for the dataset";
        synopsis, set_synopsis => "synopsis (abstract) of the dataset";
        purpose, set_purpose => "purpose of the data collection";
    }

    /// Literature references, one per line
    pub fn references(&self) -> &MultiString {
        &self.references
    }

    /// Replace the literature references
    pub fn set_references(&mut self, references: MultiString) {
        self.references = references;
    }

    /// Ports visited during the cruise
    pub fn ports_of_call(&self) -> &MultiString {
        &self.ports_of_call
    }

    /// Replace the ports of call
    pub fn set_ports_of_call(&mut self, ports: MultiString) {
        self.ports_of_call = ports;
    }

    /// Additional information lines
    pub fn addn_info(&self) -> &MultiString {
        &self.addn_info
    }

    /// Replace the additional information lines
    pub fn set_addn_info(&mut self, addn_info: MultiString) {
        self.addn_info = addn_info;
    }

    /// First day of the cruise; may be invalid
    pub fn start_datestamp(&self) -> &Datestamp {
        &self.start_datestamp
    }

    /// Assign the first day of the cruise
    pub fn set_start_datestamp(&mut self, datestamp: Datestamp) {
        self.start_datestamp = datestamp;
    }

    /// Last day of the cruise; may be invalid
    pub fn end_datestamp(&self) -> &Datestamp {
        &self.end_datestamp
    }

    /// Assign the last day of the cruise
    pub fn set_end_datestamp(&mut self, datestamp: Datestamp) {
        self.end_datestamp = datestamp;
    }

    /// Dates the metadata was submitted or updated, oldest first
    pub fn history(&self) -> &[Datestamp] {
        &self.history
    }

    /// Replace the submission history
    pub fn set_history(&mut self, history: Vec<Datestamp>) {
        self.history = history;
    }

    /// Record another submission or update date
    pub fn add_history(&mut self, datestamp: Datestamp) {
        self.history.push(datestamp);
    }

    /// Names of required fields that are not assigned
    pub fn invalid_field_names(&self) -> BTreeSet<String> {
        let mut invalid = BTreeSet::new();
        if self.dataset_id.is_empty() {
            invalid.insert("datasetId".to_string());
        }
        invalid
    }

    /// True if the dataset identifier is assigned
    pub fn is_valid(&self) -> bool {
        self.invalid_field_names().is_empty()
    }
}
