use crate::args::{CycleArgs, PendingArgs};
use crate::wiring::Components;
use anyhow::Result;
use serde_json::{Value, json};
use steward_domain::{AutonomyTaskStatus, CycleOptions, PendingFilters};
use tracing::info;

pub async fn run(args: CycleArgs, components: &Components) -> Result<Value> {
    let service = components.autonomy_service(&args.plan)?;

    let mut options = match &args.brand {
        Some(brand) => CycleOptions::for_brand(brand.clone()),
        None => CycleOptions::default(),
    };
    if let Some(max) = args.max_tasks {
        options = options.with_max_tasks(max);
    }
    if args.dry_run {
        options = options.dry_run();
    }

    let cycle = service.run_cycle(options).await?;

    // Every pending task, regardless of the listing filters
    let all_pending = PendingFilters {
        limit: Some(usize::MAX),
        ..Default::default()
    };
    let mut decisions = Vec::new();

    if let Some(actor) = &args.approve_pending {
        for task in service.get_pending(&all_pending).await {
            decisions.extend(service.approve_task(&task.id, actor).await);
        }
    }
    if let Some(reason) = &args.reject_pending {
        for task in service.get_pending(&all_pending).await {
            decisions.extend(service.reject_task(&task.id, reason).await);
        }
    }
    if let Some(actor) = &args.approve_blocked {
        for id in &cycle.task_ids {
            let blocked = service
                .get_task(id)
                .await
                .is_some_and(|t| t.status == AutonomyTaskStatus::Blocked);
            if blocked {
                decisions.extend(service.approve_task(id, actor).await);
            }
        }
    }
    if !decisions.is_empty() {
        info!(decided = decisions.len(), "Tasks decided after cycle");
    }

    let status = service.get_status().await;
    let pending = service.get_pending(&pending_filters(&args)).await;

    Ok(json!({
        "cycle": cycle,
        "decisions": decisions,
        "status": status,
        "pending": pending,
    }))
}

fn pending_filters(args: &CycleArgs) -> PendingFilters {
    let PendingArgs {
        severity,
        task_type,
        limit,
        offset,
    } = &args.filters;
    PendingFilters {
        severity: *severity,
        brand_id: args.brand.clone(),
        task_type: task_type.clone(),
        limit: *limit,
        offset: *offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_domain::Playbook;
    use steward_infrastructure::FileConfig;

    const PLAN: &str = r#"[
        {"goal": "Refresh listings", "targetEngine": "catalog", "type": "maintenance"},
        {"goal": "Launch promo", "targetEngine": "marketing", "type": "growth", "requiresApproval": true},
        {"goal": "Clean catalog", "targetEngine": "catalog", "type": "maintenance",
         "playbook": "hygiene", "input": {"action": "delete all products"}}
    ]"#;

    fn setup() -> (tempfile::TempDir, CycleArgs, Components) {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("plan.json");
        std::fs::write(&plan, PLAN).unwrap();

        let mut config = FileConfig::default();
        config
            .playbooks
            .push(Playbook::new("hygiene").forbid(r"delete\s+all"));
        let components = Components::from_config(config).unwrap();

        let args = CycleArgs {
            plan,
            brand: None,
            max_tasks: None,
            dry_run: false,
            approve_pending: None,
            approve_blocked: None,
            reject_pending: None,
            filters: PendingArgs {
                severity: None,
                task_type: None,
                limit: None,
                offset: 0,
            },
        };
        (dir, args, components)
    }

    #[tokio::test]
    async fn test_cycle_routes_tasks() {
        let (_dir, args, components) = setup();
        let result = run(args, &components).await.unwrap();

        assert_eq!(result["cycle"]["planned"], 3);
        assert_eq!(result["cycle"]["queued"], 1);
        assert_eq!(result["cycle"]["pending"], 1);
        assert_eq!(result["cycle"]["blocked"], 1);
        assert_eq!(result["pending"][0]["goal"], "Launch promo");
    }

    #[tokio::test]
    async fn test_approve_pending_completes_task() {
        let (_dir, mut args, components) = setup();
        args.approve_pending = Some("alice".to_string());
        let result = run(args, &components).await.unwrap();

        assert_eq!(result["decisions"][0]["status"], "COMPLETED");
        assert_eq!(result["status"]["counts"]["completed"], 1);
        assert_eq!(result["pending"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_approve_blocked_stays_blocked_on_forbidden_action() {
        let (_dir, mut args, components) = setup();
        args.approve_blocked = Some("alice".to_string());
        let result = run(args, &components).await.unwrap();

        assert_eq!(result["decisions"][0]["status"], "BLOCKED");
        assert_eq!(result["status"]["counts"]["blocked"], 1);
    }

    #[tokio::test]
    async fn test_dry_run_leaves_pools_empty() {
        let (_dir, mut args, components) = setup();
        args.dry_run = true;
        let result = run(args, &components).await.unwrap();

        assert_eq!(result["cycle"]["dryRun"], true);
        assert_eq!(result["status"]["counts"]["pending"], 0);
        assert!(result["status"]["lastPlan"].is_object());
    }
}
