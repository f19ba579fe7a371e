use pkg_types::pod::ResourceRequirements;
use pkg_types::quota::QuotaResources;
use serde::Serialize;
use std::ops::{Index, IndexMut};

use crate::units::Unit;

/// The two resources a report tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Cpu,
    Memory,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Cpu, Resource::Memory];

    /// Unit this resource is presented in after normalization.
    pub fn unit(self) -> Unit {
        match self {
            Resource::Cpu => Unit::Cores,
            Resource::Memory => Unit::Gibibytes,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Cpu => "CPU",
            Resource::Memory => "Memory",
        }
    }
}

/// One of the four resource dimensions: {cpu, memory} x {request, limit}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    CpuRequest,
    CpuLimit,
    MemoryRequest,
    MemoryLimit,
}

impl Dimension {
    /// Report order: CPU before memory, requests before limits.
    pub const ALL: [Dimension; 4] = [
        Dimension::CpuRequest,
        Dimension::CpuLimit,
        Dimension::MemoryRequest,
        Dimension::MemoryLimit,
    ];

    pub fn resource(self) -> Resource {
        match self {
            Dimension::CpuRequest | Dimension::CpuLimit => Resource::Cpu,
            Dimension::MemoryRequest | Dimension::MemoryLimit => Resource::Memory,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::CpuRequest => "CPU request",
            Dimension::CpuLimit => "CPU limit",
            Dimension::MemoryRequest => "Memory request",
            Dimension::MemoryLimit => "Memory limit",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for each of the four dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerDimension<T> {
    pub cpu_request: T,
    pub cpu_limit: T,
    pub memory_request: T,
    pub memory_limit: T,
}

impl<T> PerDimension<T> {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> T) -> Self {
        Self {
            cpu_request: f(Dimension::CpuRequest),
            cpu_limit: f(Dimension::CpuLimit),
            memory_request: f(Dimension::MemoryRequest),
            memory_limit: f(Dimension::MemoryLimit),
        }
    }

    /// Entries in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &T)> {
        Dimension::ALL.into_iter().map(move |d| (d, &self[d]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Dimension, &T) -> U) -> PerDimension<U> {
        PerDimension::from_fn(|d| f(d, &self[d]))
    }
}

impl PerDimension<u64> {
    /// Quantities declared by one container.
    pub fn from_requirements(resources: &ResourceRequirements) -> Self {
        Self {
            cpu_request: resources.requests.cpu_millis,
            cpu_limit: resources.limits.cpu_millis,
            memory_request: resources.requests.memory_bytes,
            memory_limit: resources.limits.memory_bytes,
        }
    }

    /// Quota amounts, with absent dimensions read as zero.
    pub fn from_quota(resources: &QuotaResources) -> Self {
        Self {
            cpu_request: resources.requests_cpu_millis.unwrap_or(0),
            cpu_limit: resources.limits_cpu_millis.unwrap_or(0),
            memory_request: resources.requests_memory_bytes.unwrap_or(0),
            memory_limit: resources.limits_memory_bytes.unwrap_or(0),
        }
    }

    /// Exact element-wise add. On overflow returns the first dimension that
    /// overflowed and leaves `self` unchanged.
    pub fn checked_accumulate(&mut self, other: &PerDimension<u64>) -> Result<(), Dimension> {
        let mut total = *self;
        for d in Dimension::ALL {
            total[d] = self[d].checked_add(other[d]).ok_or(d)?;
        }
        *self = total;
        Ok(())
    }
}

impl<T> Index<Dimension> for PerDimension<T> {
    type Output = T;

    fn index(&self, dimension: Dimension) -> &T {
        match dimension {
            Dimension::CpuRequest => &self.cpu_request,
            Dimension::CpuLimit => &self.cpu_limit,
            Dimension::MemoryRequest => &self.memory_request,
            Dimension::MemoryLimit => &self.memory_limit,
        }
    }
}

impl<T> IndexMut<Dimension> for PerDimension<T> {
    fn index_mut(&mut self, dimension: Dimension) -> &mut T {
        match dimension {
            Dimension::CpuRequest => &mut self.cpu_request,
            Dimension::CpuLimit => &mut self.cpu_limit,
            Dimension::MemoryRequest => &mut self.memory_request,
            Dimension::MemoryLimit => &mut self.memory_limit,
        }
    }
}

/// A value per resource, used for limit-to-request ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerResource<T> {
    pub cpu: T,
    pub memory: T,
}

impl<T> PerResource<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Resource, &T)> {
        Resource::ALL.into_iter().map(move |r| (r, &self[r]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Resource, &T) -> U) -> PerResource<U> {
        PerResource {
            cpu: f(Resource::Cpu, &self.cpu),
            memory: f(Resource::Memory, &self.memory),
        }
    }
}

impl<T> Index<Resource> for PerResource<T> {
    type Output = T;

    fn index(&self, resource: Resource) -> &T {
        match resource {
            Resource::Cpu => &self.cpu,
            Resource::Memory => &self.memory,
        }
    }
}

impl<T> IndexMut<Resource> for PerResource<T> {
    fn index_mut(&mut self, resource: Resource) -> &mut T {
        match resource {
            Resource::Cpu => &mut self.cpu,
            Resource::Memory => &mut self.memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkg_types::pod::ResourceList;

    #[test]
    fn requirements_map_onto_dimensions() {
        let resources = ResourceRequirements {
            requests: ResourceList::new(250, 64),
            limits: ResourceList::new(500, 128),
        };
        let q = PerDimension::from_requirements(&resources);
        assert_eq!(q[Dimension::CpuRequest], 250);
        assert_eq!(q[Dimension::CpuLimit], 500);
        assert_eq!(q[Dimension::MemoryRequest], 64);
        assert_eq!(q[Dimension::MemoryLimit], 128);
    }

    #[test]
    fn absent_quota_dimensions_are_zero() {
        let hard = QuotaResources {
            limits_memory_bytes: Some(42),
            ..Default::default()
        };
        let q = PerDimension::from_quota(&hard);
        assert_eq!(q, PerDimension {
            cpu_request: 0,
            cpu_limit: 0,
            memory_request: 0,
            memory_limit: 42,
        });
    }

    #[test]
    fn iteration_follows_report_order() {
        let q = PerDimension::from_fn(|d| d.label());
        let order: Vec<Dimension> = q.iter().map(|(d, _)| d).collect();
        assert_eq!(order, Dimension::ALL.to_vec());
        assert_eq!(Dimension::MemoryLimit.resource(), Resource::Memory);
    }

    #[test]
    fn accumulate_is_exact() {
        let mut total = PerDimension {
            cpu_request: u64::MAX - 5,
            ..Default::default()
        };
        total
            .checked_accumulate(&PerDimension {
                cpu_request: 5,
                memory_limit: 7,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(total.cpu_request, u64::MAX);
        assert_eq!(total.memory_limit, 7);
    }

    #[test]
    fn accumulate_overflow_leaves_totals_untouched() {
        let before = PerDimension {
            cpu_request: 10,
            memory_request: u64::MAX - 1,
            ..Default::default()
        };
        let mut total = before;
        let overflowed = total.checked_accumulate(&PerDimension {
            cpu_request: 1,
            memory_request: 2,
            ..Default::default()
        });
        assert_eq!(overflowed, Err(Dimension::MemoryRequest));
        assert_eq!(total, before);
    }
}
