use std::path::{
    Path,
    PathBuf,
};

use crate::{
    fs::{
        self,
        DirWalker,
        EntryKind,
    },
    Sweeper,
    SweeperError,
};

pub struct CrewOptions {
    pub report_consumer: Box<dyn CrewReportConsumer>,
}

impl Default for CrewOptions {
    fn default() -> Self {
        Self {
            report_consumer: Box::new(VoidCrewReportConsumer),
        }
    }
}

pub trait CrewReportConsumer {
    fn consume_report(&mut self, report: CrewReport);
}

pub struct VoidCrewReportConsumer;
impl CrewReportConsumer for VoidCrewReportConsumer {
    fn consume_report(&mut self, _report: CrewReport) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrewReport {
    StatusInspecting(PathBuf),
    TargetSwept { sweeper: String, path: PathBuf },
}

pub struct SweeperCrew {
    members: Vec<Box<dyn Sweeper>>,
}

impl SweeperCrew {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn register<T: Sweeper + 'static>(&mut self, sweeper: T) {
        self.register_boxed(Box::new(sweeper))
    }

    pub fn register_boxed(&mut self, sweeper: Box<dyn Sweeper>) {
        self.members.push(sweeper)
    }

    /// Walk everything below `root_directory` and let every member clean up what it identifies.
    ///
    /// Targets are removed the moment they are found. The first error stops the walk;
    /// whatever has been removed until then stays removed.
    pub fn execute(
        &self,
        root_directory: &Path,
        mut options: CrewOptions,
    ) -> Result<(), SweeperError> {
        log::debug!("Sweeping {}", root_directory.display());

        let mut dir_walker = DirWalker::new();
        dir_walker.insert_entries(root_directory)?;

        while let Some(item) = dir_walker.next_item() {
            let item_path = item.path();
            log::trace!("Inspecting {}", item_path.display());
            options
                .report_consumer
                .consume_report(CrewReport::StatusInspecting(item_path.clone()));

            /* Classify first as the entry may be gone once a sweeper is done with it */
            let kind = fs::classify(&item).map_err(|source| SweeperError::Traversal {
                path: item_path.clone(),
                source,
            })?;

            for sweeper in &self.members {
                for target in sweeper.identify_targets(&item, kind)? {
                    let target_path = target.path().to_owned();
                    log::trace!(
                        "Identified new target {} at {} by {}",
                        target.name(),
                        target_path.display(),
                        sweeper.name()
                    );

                    target.cleanup()?;
                    log::debug!("Removed {}", target_path.display());
                    options.report_consumer.consume_report(CrewReport::TargetSwept {
                        sweeper: sweeper.name().to_string(),
                        path: target_path,
                    });
                }
            }

            if kind == EntryKind::Directory {
                dir_walker.insert_entries(&item_path)?;
            }
        }

        Ok(())
    }
}
