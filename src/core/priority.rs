//! Priority ordering for the default (no query) view.
//!
//! Symbols named in the top list move ahead of everything else. This is a
//! single stable partition: both groups keep their catalog order.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::services::catalog::SymbolEntry;

/// A set of symbol names surfaced first when nothing is typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopSymbols {
    names: HashSet<String>,
}

impl TopSymbols {
    /// The built-in list, shared for the whole process.
    pub fn defaults() -> &'static TopSymbols {
        &DEFAULT_TOP_SET
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Catalog positions with top symbols first.
    pub fn partition_indices(&self, catalog: &[SymbolEntry]) -> Vec<usize> {
        let (mut top, rest): (Vec<usize>, Vec<usize>) =
            (0..catalog.len()).partition(|&i| self.contains(&catalog[i].name));
        top.extend(rest);
        top
    }

    /// Reorder a catalog with top symbols first.
    pub fn prioritize<'a>(&self, catalog: &'a [SymbolEntry]) -> Vec<&'a SymbolEntry> {
        self.partition_indices(catalog)
            .into_iter()
            .map(|i| &catalog[i])
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TopSymbols {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

static DEFAULT_TOP_SET: Lazy<TopSymbols> =
    Lazy::new(|| DEFAULT_TOP_SYMBOLS.iter().copied().collect());

/// Commonly picked symbols, shown first by default
pub static DEFAULT_TOP_SYMBOLS: &[&str] = &[
    "eraser.fill",
    "trash.fill",
    "folder.fill",
    "tray.fill",
    "tray.2.fill",
    "externaldrive.fill",
    "archivebox",
    "archivebox.fill",
    "xmark.bin.fill",
    "document.on.clipboard",
    "heart.text.clipboard.fill",
    "calendar",
    "books.vertical.fill",
    "book.closed.fill",
    "character.book.closed.fill",
    "magazine.fill",
    "bookmark.fill",
    "graduationcap.fill",
    "backpack.fill",
    "link",
    "person.fill",
    "lanyardcard.fill",
    "person.crop.square.on.square.angled",
    "person.crop.rectangle.stack.fill",
    "figure.stand.dress",
    "figure.arms.open",
    "oar.2.crossed",
    "dumbbell.fill",
    "soccerball.inverse",
    "baseball.fill",
    "basketball.fill",
    "american.football.fill",
    "american.football.professional.fill",
    "tennis.racket",
    "tennisball.fill",
    "volleyball.fill",
    "skateboard",
    "snowboard.fill",
    "trophy.fill",
    "keyboard.fill",
    "sun.max.fill",
    "moon.fill",
    "moon.circle.fill",
    "cloud.fill",
    "cloud.circle.fill",
    "cloud.moon.fill",
    "wind.snow",
    "snowflake",
    "tornado.circle.fill",
    "thermometer.variable",
    "thermometer.medium",
    "fire.extinguisher.fill",
    "beach.umbrella.fill",
    "umbrella",
    "microphone.fill",
    "shield.lefthalf.filled",
    "flag.pattern.checkered",
    "bell.fill",
    "tag.fill",
    "camera.fill",
    "message.fill",
    "checkmark.message.fill",
    "ellipsis.message.fill",
    "bubble.right.fill",
    "exclamationmark.bubble.fill",
    "quote.closing",
    "translate",
    "phone.fill",
    "video.fill",
    "envelope.front.fill",
    "envelope.fill",
    "bag.fill",
    "basket",
    "creditcard",
    "creditcard.fill",
    "wallet.pass",
    "wallet.pass.fill",
    "wallet.bifold",
    "wallet.bifold.fill",
    "dice.fill",
    "die.face.5.fill",
    "pianokeys.inverse",
    "paintbrush.fill",
    "paintbrush.pointed.fill",
    "wrench.adjustable.fill",
    "hammer.fill",
    "screwdriver.fill",
    "wrench.and.screwdriver.fill",
    "scroll.fill",
    "printer",
    "printer.fill",
    "handbag.fill",
    "latch.2.case.fill",
    "cross.case.fill",
    "suitcase.fill",
    "suitcase.rolling.fill",
    "puzzlepiece.fill",
    "lightbulb.fill",
    "fan.fill",
    "lamp.desk.fill",
    "lamp.floor.fill",
    "chair.lounge.fill",
    "fireplace.fill",
    "stove.fill",
    "robotic.vacuum.fill",
    "toilet.fill",
    "tent",
    "signpost.right.fill",
    "lock",
    "lock.fill",
    "pin.fill",
    "sensor.tag.radiowaves.forward.fill",
    "watch.analog",
    "headphones",
    "radio.fill",
    "airplane",
    "car",
    "car.rear",
    "bus.fill",
    "tram",
    "sailboat",
    "sailboat.fill",
    "truck.box.fill",
    "bicycle",
    "moped.fill",
    "fuelpump.fill",
    "key.card.fill",
    "horn.fill",
    "lungs.fill",
    "facemask.fill",
    "pill.fill",
    "pills.fill",
    "tortoise.fill",
    "dog.fill",
    "cat.fill",
    "bird.fill",
    "ant.fill",
    "ladybug.fill",
    "fish.fill",
    "pawprint.fill",
    "teddybear.fill",
    "tree.fill",
    "crown.fill",
    "hat.widebrim.fill",
    "hat.cap.fill",
    "tshirt.fill",
    "jacket",
    "jacket.fill",
    "shoe.fill",
    "shoe.2",
    "face.smiling.inverse",
    "eyes.inverse",
    "comb.fill",
    "sunglasses.fill",
    "hearingdevice.ear.fill",
    "hand.raised.fingers.spread.fill",
    "hands.clap.fill",
    "shippingbox.fill",
    "deskclock.fill",
    "alarm.fill",
    "gamecontroller.fill",
    "paintpalette",
    "swatchpalette.fill",
    "cup.and.saucer.fill",
    "cup.and.heat.waves.fill",
    "mug.fill",
    "takeoutbag.and.cup.and.straw.fill",
    "wineglass.fill",
    "birthday.cake",
    "birthday.cake.fill",
    "carrot.fill",
    "fork.knife",
    "waveform.circle.fill",
    "simcard.fill",
    "scalemass.fill",
    "fossil.shell.fill",
    "gift.fill",
    "hourglass",
    "binoculars.fill",
    "battery.75percent",
    "exclamationmark.shield.fill",
];
