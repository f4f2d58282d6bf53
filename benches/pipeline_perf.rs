// Validation pipeline benchmarks.
//
// Run with: cargo bench
//
// Performance Targets:
// | Operation             | Target   | Description                          |
// |-----------------------|----------|--------------------------------------|
// | Pipeline (100)        | < 1ms    | 100 ids per entity type              |
// | Pipeline (1k)         | < 20ms   | 1000 ids per entity type             |
// | Bundle parse (1k)     | < 20ms   | JSON bundle with 1000 ids per type   |
// | Fingerprint (1k)      | < 5ms    | SHA256 over a 1000-id result         |

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use import_mapping_check::bundle::{BundleFormat, ValidationBundle};
use import_mapping_check::format::{TextFormatOptions, format_mapping_result};
use import_mapping_check::i18n::Localizer;
use import_mapping_check::lookup::{FieldContext, ProjectSnapshot, TargetSnapshot};
use import_mapping_check::mapping::ProjectImportMapper;
use import_mapping_check::model::{
    BackupProject, CustomField, CustomFieldOption, CustomFieldType, ExternalCustomField,
    ExternalCustomFieldConfiguration, ExternalCustomFieldOption, ExternalProjectRoleActor,
    ExternalUser, ImportOptions, IssueType, Status, Workflow,
};
use import_mapping_check::util::report_fingerprint;
use import_mapping_check::validation::ProjectImportValidators;
use std::sync::Once;
use std::time::Instant;
use tracing::info;

const SIZES: [usize; 3] = [100, 500, 1000];

fn init_bench_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = import_mapping_check::logging::init_logging(0, false, None);
    });
}

fn log_group_start(name: &str) {
    info!("benchmark_group_start: name={name}");
}

fn log_group_end(name: &str) {
    info!("benchmark_group_end: name={name}");
}

fn log_bench_start(name: &str) -> Instant {
    info!("benchmark_start: {name}");
    Instant::now()
}

fn log_bench_end(name: &str, started_at: Instant) {
    info!("benchmark_end: {name} duration={:?}", started_at.elapsed());
}

/// A bundle with `size` ids per entity type. Issue types and custom fields
/// are all mapped so every stage runs; every fifth id of the rest is left
/// unmapped so the validators take their slow paths too.
fn synthetic_bundle(size: usize) -> ValidationBundle {
    let mut backup = BackupProject::new("BENCH");
    let mut mapper = ProjectImportMapper::default();
    let mut target = TargetSnapshot {
        default_workflow: Workflow {
            name: "jira".to_string(),
            linked_status_ids: Vec::new(),
            system_default: true,
        },
        ..TargetSnapshot::default()
    };
    target.projects.push(ProjectSnapshot::new("1", "BENCH"));
    target
        .custom_field_types
        .push(CustomFieldType::importable("select", "Select List"));

    for i in 0..size {
        let old = i.to_string();
        let new = format!("n{i}");
        let mapped = i % 5 != 0;

        mapper.issue_types.register_issue_type(old.clone(), format!("Type {i}"), false);
        mapper.issue_types.flag_as_required(old.clone());
        target.issue_types.push(IssueType::new(new.clone(), format!("Type {i}")));
        mapper.issue_types.map_value(old.clone(), new.clone());

        mapper.statuses.register_old_value(old.clone(), format!("Status {i}"));
        mapper
            .statuses
            .flag_required_for_issue_type(old.clone(), (i % 10).to_string());
        target.statuses.push(Status::new(new.clone(), format!("Status {i}")));
        if i % 2 == 0 {
            target.default_workflow.linked_status_ids.push(new.clone());
        }
        if mapped {
            mapper.statuses.map_value(old.clone(), new.clone());
        }

        for table in [
            &mut mapper.priorities,
            &mut mapper.resolutions,
            &mut mapper.groups,
            &mut mapper.project_roles,
            &mut mapper.security_levels,
        ] {
            table.register_old_value(old.clone(), format!("Value {i}"));
            table.flag_as_required(old.clone());
            if mapped {
                table.map_value(old.clone(), new.clone());
            }
        }

        let field_id = format!("cf{i}");
        backup
            .custom_field_configurations
            .push(ExternalCustomFieldConfiguration::new(
                ExternalCustomField::new(field_id.clone(), format!("Field {i}"), "select"),
                "70",
            ));
        mapper
            .custom_fields
            .register_old_value(field_id.clone(), format!("Field {i}"));
        mapper.custom_fields.flag_as_required(field_id.clone());
        mapper.custom_fields.map_value(field_id.clone(), format!("n{field_id}"));
        target
            .custom_fields
            .push(CustomField::new(format!("n{field_id}"), format!("Field {i}"), "select"));
        target
            .field_contexts
            .push(FieldContext::global(format!("n{field_id}"), "700"));

        let option_id = format!("o{i}");
        mapper
            .custom_field_options
            .register_option(ExternalCustomFieldOption::top_level(
                option_id.clone(),
                field_id.clone(),
                "70",
                format!("Option {i}"),
            ));
        mapper.custom_field_options.flag_as_required(option_id.clone());
        if mapped {
            mapper
                .custom_field_options
                .map_value(option_id.clone(), format!("n{option_id}"));
        }
        target.options.push(CustomFieldOption {
            id: format!("n{option_id}"),
            custom_field_id: format!("n{field_id}"),
            parent_id: None,
            value: format!("Option {i}"),
        });

        let user = format!("user{i}");
        mapper.users.flag_user_as_mandatory(user.clone());
        if i % 3 == 0 {
            mapper.users.register_user(ExternalUser::named(user.clone()));
        }
        backup
            .project_role_actors
            .push(ExternalProjectRoleActor::user(old, user));
    }

    ValidationBundle {
        backup,
        options: ImportOptions {
            overwrite_project_details: true,
        },
        mappings: mapper,
        target,
    }
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

/// Benchmark a full validation pass.
fn bench_pipeline_run(c: &mut Criterion) {
    init_bench_logging();
    let group_name = "pipeline/run";
    log_group_start(group_name);
    let mut group = c.benchmark_group(group_name);
    let validators = ProjectImportValidators::default();
    let localizer = Localizer::english();

    for size in SIZES {
        let bundle = synthetic_bundle(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bundle, |b, bundle| {
            let bench_name = format!("pipeline/run/size={size}");
            let bench_start = log_bench_start(&bench_name);
            b.iter(|| black_box(bundle.validate(&validators, &localizer)));
            log_bench_end(&bench_name, bench_start);
        });
    }

    group.finish();
    log_group_end(group_name);
}

/// Benchmark parsing a JSON bundle.
fn bench_bundle_parse(c: &mut Criterion) {
    init_bench_logging();
    let group_name = "bundle/parse_json";
    log_group_start(group_name);
    let mut group = c.benchmark_group(group_name);

    for size in SIZES {
        let json = serde_json::to_string(&synthetic_bundle(size)).expect("serialize bundle");

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            let bench_name = format!("bundle/parse_json/size={size}");
            let bench_start = log_bench_start(&bench_name);
            b.iter(|| {
                let bundle = ValidationBundle::parse(json, BundleFormat::Json).expect("parse");
                black_box(bundle)
            });
            log_bench_end(&bench_name, bench_start);
        });
    }

    group.finish();
    log_group_end(group_name);
}

// =============================================================================
// Report Benchmarks
// =============================================================================

/// Benchmark fingerprinting and text rendering of a result.
fn bench_report(c: &mut Criterion) {
    init_bench_logging();
    let group_name = "report";
    log_group_start(group_name);
    let mut group = c.benchmark_group(group_name);
    let bundle = synthetic_bundle(1000);
    let result = bundle.validate(&ProjectImportValidators::default(), &Localizer::english());
    info!(
        "report_input: errors={} warnings={}",
        result.error_count(),
        result.warning_count()
    );

    group.bench_function("fingerprint", |b| {
        let bench_start = log_bench_start("report/fingerprint");
        b.iter(|| black_box(report_fingerprint(&result)));
        log_bench_end("report/fingerprint", bench_start);
    });

    group.bench_function("text", |b| {
        let bench_start = log_bench_start("report/text");
        b.iter(|| black_box(format_mapping_result(&result, TextFormatOptions::plain())));
        log_bench_end("report/text", bench_start);
    });

    group.finish();
    log_group_end(group_name);
}

criterion_group!(pipeline_benches, bench_pipeline_run, bench_bundle_parse);

criterion_group!(report_benches, bench_report);

criterion_main!(pipeline_benches, report_benches);
