use chrono::Utc;
use pkg_types::pod::{ContainerSpec, Pod, PodPhase, PodSpec, ResourceList, ResourceRequirements};
use pkg_types::quota::{QuotaResources, ResourceQuota};
use std::collections::HashMap;

/// (cpu request, cpu limit, memory request, memory limit)
pub type Res = (u64, u64, u64, u64);

pub fn container(idx: usize, (cpu_req, cpu_lim, mem_req, mem_lim): Res) -> ContainerSpec {
    ContainerSpec {
        name: format!("c{}", idx),
        image: "nginx:latest".to_string(),
        resources: ResourceRequirements {
            requests: ResourceList::new(cpu_req, mem_req),
            limits: ResourceList::new(cpu_lim, mem_lim),
        },
    }
}

pub fn make_pod(name: &str, namespace: &str, containers: &[Res]) -> Pod {
    Pod {
        name: name.to_string(),
        namespace: namespace.to_string(),
        spec: PodSpec {
            containers: containers
                .iter()
                .enumerate()
                .map(|(i, r)| container(i, *r))
                .collect(),
            node_name: Some("worker-1".to_string()),
        },
        phase: PodPhase::Running,
        labels: HashMap::new(),
        created_at: Utc::now(),
    }
}

pub fn cpu_request_pod(name: &str, cpu_millis: u64) -> Pod {
    make_pod(name, "default", &[(cpu_millis, 0, 0, 0)])
}

pub fn make_quota(name: &str, hard: Res, used: Res) -> ResourceQuota {
    let to_quota = |(cpu_req, cpu_lim, mem_req, mem_lim): Res| QuotaResources {
        requests_cpu_millis: Some(cpu_req),
        limits_cpu_millis: Some(cpu_lim),
        requests_memory_bytes: Some(mem_req),
        limits_memory_bytes: Some(mem_lim),
    };
    ResourceQuota {
        name: name.to_string(),
        namespace: name.to_string(),
        hard: to_quota(hard),
        used: to_quota(used),
    }
}

pub const GIB: u64 = 1024 * 1024 * 1024;
