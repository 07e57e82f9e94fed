//! Container status as reported by the container runtime CLI.

use serde::Deserialize;

use crate::model::container::{ContainerDto, ContainersDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub state: String,
}

impl Container {
    pub fn into_dto(self) -> ContainerDto {
        ContainerDto {
            id: self.id,
            name: self.name,
            image: self.image,
            status: self.status,
            state: self.state,
        }
    }
}

/// One line of `ps --format '{{json .}}'` output.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PsLine {
    #[serde(rename = "ID")]
    id: String,
    names: String,
    image: String,
    status: String,
    #[serde(default)]
    state: String,
}

/// Parses JSON-lines `ps` output, skipping blank or malformed lines.
pub fn parse_ps_output(output: &str) -> Vec<Container> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match serde_json::from_str::<PsLine>(line) {
            Ok(ps) => Some(Container {
                id: ps.id,
                name: ps.names,
                image: ps.image,
                status: ps.status,
                state: ps.state,
            }),
            Err(e) => {
                tracing::warn!("Skipping unparsable container line: {}", e);
                None
            }
        })
        .collect()
}

pub fn into_dto(runtime: &str, containers: Vec<Container>) -> ContainersDto {
    ContainersDto {
        runtime: runtime.to_string(),
        containers: containers.into_iter().map(|c| c.into_dto()).collect(),
    }
}
