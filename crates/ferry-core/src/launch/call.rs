use ferry_model::{
    Task,
    wire::{
        Accept, AgentId, Call, CallType, DurationInfo, Filters, FrameworkId, Kill, KillPolicy,
        Launch, OfferId, Operation, OperationType, TaskId, TaskInfo,
    },
};

/// How long the master holds back the offer's remaining resources from this framework.
pub const REFUSE_SECONDS: f64 = 1.0;

/// `ACCEPT` call launching every descriptor in a single operation on `offer_id`.
pub fn accept_call(
    framework_id: &FrameworkId,
    offer_id: OfferId,
    task_infos: Vec<TaskInfo>,
) -> Call {
    Call {
        framework_id: Some(framework_id.clone()),
        kind: CallType::Accept,
        accept: Some(Accept {
            offer_ids: vec![offer_id],
            operations: vec![Operation {
                kind: OperationType::Launch,
                launch: Some(Launch { task_infos }),
            }],
            filters: Some(Filters {
                refuse_seconds: Some(REFUSE_SECONDS),
            }),
        }),
        kill: None,
    }
}

/// `KILL` call for a task on its agent, with the task's grace period when it has one.
pub fn kill_call(framework_id: &FrameworkId, task: &Task) -> Call {
    let kill_policy = task
        .kill_policy
        .and_then(|p| p.grace_period_nanos())
        .map(|nanoseconds| KillPolicy {
            grace_period: Some(DurationInfo { nanoseconds }),
        });

    Call {
        framework_id: Some(framework_id.clone()),
        kind: CallType::Kill,
        accept: None,
        kill: Some(Kill {
            task_id: TaskId::new(task.id.as_str()),
            agent_id: Some(AgentId::new(task.agent_id.as_str())),
            kill_policy,
        }),
    }
}
