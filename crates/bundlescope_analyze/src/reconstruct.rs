use log::{debug, trace, warn};

use bundlescope_core::{BUNDLE_TERMINATOR, CommentToken, ModuleIndex, normalize_identifier};

use crate::{error::AnalyzeError, types::ModuleReport};

/// Module whose marker has been seen but whose extent is not known yet.
#[derive(Debug)]
struct OpenModule {
    report: ModuleReport,
    /// End offset of the module's marker comment
    end: u32,
}

impl OpenModule {
    fn close(mut self, size: usize) -> ModuleReport {
        self.report.size = size;
        self.report
    }
}

/// Attributes bundle bytes to modules.
///
/// A module spans from the end of its marker comment to the start of the next
/// marker. The last module runs up to and including the first `}]))` after its
/// marker, or to the end of the source when there is none.
pub fn reconstruct_modules(
    source: &str,
    markers: &[CommentToken<'_>],
    index: &ModuleIndex<'_>,
    cwd: &str,
) -> Result<Vec<ModuleReport>, AnalyzeError> {
    debug!("Reconstructing module boundaries from {} markers", markers.len());

    let (mut reports, open) = markers.iter().try_fold(
        (Vec::with_capacity(markers.len()), None::<OpenModule>),
        |(mut reports, open), marker| {
            let module = index.lookup(marker.value).ok_or_else(|| {
                AnalyzeError::UnknownModuleId {
                    marker: marker.value.to_string(),
                    offset: marker.start,
                }
            })?;

            if let Some(prev) = open {
                let size = (marker.start - prev.end) as usize;
                trace!("Module {} closed at {} with {} bytes", prev.report.id, marker.start, size);
                reports.push(prev.close(size));
            }

            let next = OpenModule {
                report: ModuleReport {
                    id: module.id,
                    name: module.name.clone(),
                    size: 0,
                    identifier: normalize_identifier(&module.identifier, cwd),
                },
                end: marker.end,
            };
            trace!("Module {} opened at {}", next.report.id, next.end);
            Ok::<_, AnalyzeError>((reports, Some(next)))
        },
    )?;

    if let Some(last) = open {
        let end_at = find_last_end(source, last.end);
        let size = end_at - last.end as usize + 1;
        trace!("Last module {} closed at {} with {} bytes", last.report.id, end_at, size);
        reports.push(last.close(size));
    }

    debug!("Reconstructed {} modules", reports.len());
    Ok(reports)
}

fn find_last_end(source: &str, from: u32) -> usize {
    let from = from as usize;
    match source.get(from..).and_then(|rest| rest.find(BUNDLE_TERMINATOR)) {
        Some(offset) if offset > 0 => from + offset,
        _ => {
            warn!(
                "Bundle terminator {:?} not found after offset {}; last module runs to end of file",
                BUNDLE_TERMINATOR, from
            );
            source.len()
        }
    }
}
