//! Recording fakes of the link ports, shared by the link tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::{DependencyConfig, ProjectConfig};
use crate::context::ServiceContext;
use crate::ports::{AssetLinker, HookExecutor, NativeLinker, StepFuture};
use crate::project::{collect_platforms, Dependency, PlatformMap, ProjectContext};

type CallLog = Arc<Mutex<Vec<String>>>;

/// Configures which fake steps fail; every call is appended to one log.
#[derive(Default)]
pub(crate) struct FakePorts {
    pub(crate) failing_hook: Option<String>,
    pub(crate) fail_native: bool,
    pub(crate) fail_assets: bool,
    pub(crate) log: CallLog,
}

impl FakePorts {
    pub(crate) fn context(&self) -> ServiceContext {
        ServiceContext {
            hooks: Box::new(FakeHooks { log: Arc::clone(&self.log), failing: self.failing_hook.clone() }),
            native: Box::new(FakeNative { log: Arc::clone(&self.log), fail: self.fail_native }),
            assets: Box::new(FakeAssets { log: Arc::clone(&self.log), fail: self.fail_assets }),
            ..ServiceContext::live(Path::new("."))
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

fn platform_names(platforms: &PlatformMap) -> String {
    platforms.keys().cloned().collect::<Vec<_>>().join(",")
}

struct FakeHooks {
    log: CallLog,
    failing: Option<String>,
}

impl HookExecutor for FakeHooks {
    fn execute<'a>(&'a self, command: &'a str) -> StepFuture<'a> {
        self.log.lock().unwrap().push(format!("hook:{command}"));
        let fail = self.failing.as_deref() == Some(command);
        Box::pin(async move {
            if fail {
                return Err(format!("hook \"{command}\" exploded").into());
            }
            Ok(())
        })
    }
}

struct FakeNative {
    log: CallLog,
    fail: bool,
}

impl NativeLinker for FakeNative {
    fn link_dependency<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        _project: &'a ProjectConfig,
        dependency: &'a Dependency,
    ) -> StepFuture<'a> {
        self.log
            .lock()
            .unwrap()
            .push(format!("native:{}:{}", dependency.name, platform_names(platforms)));
        Box::pin(async move {
            if self.fail {
                return Err("native linking failed".into());
            }
            Ok(())
        })
    }
}

struct FakeAssets {
    log: CallLog,
    fail: bool,
}

impl AssetLinker for FakeAssets {
    fn link_assets<'a>(
        &'a self,
        platforms: &'a PlatformMap,
        _project: &'a ProjectConfig,
        assets: &'a [String],
    ) -> StepFuture<'a> {
        self.log
            .lock()
            .unwrap()
            .push(format!("assets:{}:{}", platform_names(platforms), assets.join(",")));
        Box::pin(async move {
            if self.fail {
                return Err("asset linking failed".into());
            }
            Ok(())
        })
    }
}

pub(crate) fn dependency(
    name: &str,
    prelink: Option<&str>,
    postlink: Option<&str>,
    assets: &[&str],
) -> Dependency {
    let mut config = DependencyConfig::default();
    config.dependency.hooks.insert("prelink".into(), prelink.map(str::to_string));
    config.dependency.hooks.insert("postlink".into(), postlink.map(str::to_string));
    config.dependency.assets = assets.iter().map(|a| (*a).to_string()).collect();
    Dependency { name: name.into(), root: PathBuf::from("node_modules").join(name), config }
}

pub(crate) fn project(dependencies: Vec<Dependency>) -> ProjectContext {
    let project = ProjectConfig {
        dependencies: BTreeMap::new(),
        commands: Vec::new(),
        platforms: BTreeMap::new(),
        assets: Vec::new(),
        react_native_path: PathBuf::from("node_modules/react-native"),
    };
    let platforms = collect_platforms(&project, &dependencies);
    ProjectContext {
        root: PathBuf::from("."),
        project,
        platforms,
        dependencies: dependencies.into_iter().map(|d| (d.name.clone(), d)).collect(),
    }
}
