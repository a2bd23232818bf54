mod plan;

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info, warn};

use ferry_api::HttpTransport;
use ferry_core::{
    LaunchCoordinator, MemoryStore, MetricsHandle, PortAllocator, TaskBuilder, TaskInfoBuilder,
    launch::accept_call, targets_for,
};
use ferry_model::{TargetChange, TargetChangeEvent};
use ferry_observe::{init_local_offset, init_logger};
use ferry_prometheus::PrometheusMetrics;

use crate::plan::{Plan, overcommitted, scalar_resources};

fn main() -> anyhow::Result<()> {
    // local offset can only be read before the runtime spawns its threads
    init_local_offset();

    let path = std::env::args()
        .nth(1)
        .context("usage: ferry-schedd <plan.json>")?;
    let plan = Plan::load(&path)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(plan))
}

async fn run(plan: Plan) -> anyhow::Result<()> {
    // 1) logger + metrics
    init_logger(&plan.logger)?;
    let metrics = PrometheusMetrics::new()?;
    let handle: MetricsHandle = Arc::new(metrics.clone());
    info!(offer = %plan.offer.id, versions = plan.versions.len(), "plan loaded");

    // 2) store + builders
    let store = Arc::new(plan.applications.into_iter().collect::<MemoryStore>());
    let tasks = TaskBuilder::new(store).with_metrics(handle.clone());
    let descriptors = TaskInfoBuilder::new().with_metrics(handle.clone());

    // 3) tasks and descriptors, sharing one port cursor over the offer
    let mut ports = PortAllocator::from_offer(&plan.offer);
    let mut task_infos = Vec::with_capacity(plan.versions.len());
    for version in &plan.versions {
        let task = tasks
            .build_task(&plan.offer, version, None)
            .await
            .with_context(|| format!("failed to build task for app {}", version.app_id))?;

        let task_info =
            descriptors.build_with(&mut ports, &plan.offer, scalar_resources(&task), &task);
        for target in targets_for(&task, &task_info) {
            let event = TargetChangeEvent {
                change: TargetChange::Add,
                target,
            };
            info!(%event, "endpoint planned");
        }
        task_infos.push(task_info);
    }
    debug!(ports_left = ports.remaining(), "descriptors built");
    for (resource, claimed, offered) in overcommitted(&plan.offer, &task_infos) {
        warn!(resource, claimed, offered, "descriptors claim more than the offer grants");
    }

    // 4) launch
    let framework_id = plan.master.framework();
    if plan.dry_run {
        let call = accept_call(&framework_id, plan.offer.id, task_infos);
        println!("{}", serde_json::to_string_pretty(&call)?);
        return Ok(());
    }

    let transport = Arc::new(HttpTransport::new(&plan.master)?);
    let coordinator = LaunchCoordinator::new(framework_id, transport).with_metrics(handle);
    let resp = coordinator.launch_tasks(plan.offer, task_infos).await?;
    info!(
        status = resp.status,
        launched = coordinator.tasks_launched(),
        "offer accepted"
    );

    debug!(metrics = %metrics.encode_text()?, "final metrics");
    Ok(())
}
