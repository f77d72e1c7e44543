//! Photo album: the set of open photos and the status line reported to the user.
//!
//! Every opened photo gets its own [`FrameComposer`] and therefore its own
//! annotation store; removing the photo drops both.

use crate::annotation::DrawingAttributes;
use crate::composer::FrameComposer;
use crate::config::Config;
use crate::draw::{FontMetrics, PhotoSurface};
use crate::error::PhotoError;
use crate::input::CommitKey;
use log::{error, info};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Tags offered by the album toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Family,
    Friends,
    Fools,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Family => "Family",
            Category::Friends => "Friends",
            Category::Fools => "Fools",
        };
        f.write_str(name)
    }
}

/// Outcome of an album command, shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Opened(String),
    OpenCancelled,
    Removed(String),
    NothingToRemove,
    CategorySelected(Category),
    CategoryDeselected(Category),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Opened(name) => write!(f, "File '{name}' was opened"),
            Status::OpenCancelled => f.write_str("Open command was cancelled"),
            Status::Removed(name) => write!(f, "File '{name}' was removed"),
            Status::NothingToRemove => f.write_str("No file to remove"),
            Status::CategorySelected(category) => write!(f, "'{category}' was selected"),
            Status::CategoryDeselected(category) => write!(f, "'{category}' was deselected"),
        }
    }
}

/// A decoded photo together with its annotations.
pub struct OpenPhoto {
    name: String,
    surface: cairo::ImageSurface,
    composer: FrameComposer,
}

impl OpenPhoto {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    pub fn composer(&self) -> &FrameComposer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut FrameComposer {
        &mut self.composer
    }

    /// Paints the visible side of this photo.
    pub fn render<M: FontMetrics + ?Sized>(&self, ctx: &cairo::Context, metrics: &M) {
        self.composer.render(ctx, &self.surface, metrics);
    }
}

impl fmt::Debug for OpenPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenPhoto")
            .field("name", &self.name)
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .field("composer", &self.composer)
            .finish()
    }
}

/// Open photos plus the toolbar's category selection.
#[derive(Debug)]
pub struct Album {
    photos: Vec<OpenPhoto>,
    current: Option<usize>,
    categories: BTreeSet<Category>,
    attributes: DrawingAttributes,
    commit_key: CommitKey,
}

impl Album {
    pub fn new(config: &Config) -> Self {
        Self {
            photos: Vec::new(),
            current: None,
            categories: BTreeSet::new(),
            attributes: config.drawing_attributes(),
            commit_key: config.input.commit_key,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn current(&self) -> Option<&OpenPhoto> {
        self.current.map(|i| &self.photos[i])
    }

    pub fn current_mut(&mut self) -> Option<&mut OpenPhoto> {
        let index = self.current?;
        self.photos.get_mut(index)
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Decodes a PNG file and makes it the current photo.
    pub fn open(&mut self, path: &Path) -> Result<Status, PhotoError> {
        let unreadable = |reason: String| PhotoError::UnreadableResource {
            path: path.to_path_buf(),
            reason,
        };

        let surface = File::open(path)
            .map_err(|err| unreadable(err.to_string()))
            .and_then(|mut file| {
                cairo::ImageSurface::create_from_png(&mut file)
                    .map_err(|err| unreadable(err.to_string()))
            })
            .inspect_err(|err| error!("{err}"))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.add_photo(name, surface))
    }

    /// Adds an already decoded photo and makes it current.
    pub fn add_photo(&mut self, name: impl Into<String>, surface: cairo::ImageSurface) -> Status {
        let name = name.into();
        let composer = FrameComposer::new(
            self.attributes.clone(),
            PhotoSurface::width(&surface),
            self.commit_key,
        );
        info!(
            "Opened '{}' ({}x{})",
            name,
            PhotoSurface::width(&surface),
            PhotoSurface::height(&surface)
        );
        self.photos.push(OpenPhoto {
            name: name.clone(),
            surface,
            composer,
        });
        self.current = Some(self.photos.len() - 1);
        Status::Opened(name)
    }

    pub fn cancel_open(&self) -> Status {
        Status::OpenCancelled
    }

    /// Removes the current photo and its annotations.
    ///
    /// Reports `NothingToRemove` only when no photo was open.
    pub fn remove_current(&mut self) -> Status {
        let Some(index) = self.current else {
            return Status::NothingToRemove;
        };

        let removed = self.photos.remove(index);
        self.current = if self.photos.is_empty() {
            None
        } else {
            Some(index.min(self.photos.len() - 1))
        };
        info!("Removed '{}'", removed.name);
        Status::Removed(removed.name)
    }

    pub fn toggle_category(&mut self, category: Category) -> Status {
        if self.categories.remove(&category) {
            Status::CategoryDeselected(category)
        } else {
            self.categories.insert(category);
            Status::CategorySelected(category)
        }
    }
}
