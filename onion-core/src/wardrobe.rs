use crate::clothing::{BodyPart, ClothingItem, LayerRole};
use crate::combo::Combination;

/// A read-only set of clothing items to pick outfits from.
///
/// Built once at startup and shared; combination generation never mutates
/// it, so a shared reference is safe across threads.
#[derive(Debug, Clone)]
pub struct Wardrobe {
    items: Vec<ClothingItem>,
}

impl Wardrobe {
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn items_for_part(&self, part: BodyPart) -> Vec<&ClothingItem> {
        self.items.iter().filter(|i| i.body_part == part).collect()
    }

    /// All rule-valid layered combinations for one body part.
    ///
    /// Subsets are enumerated size-ascending and lexicographically within a
    /// size, so callers relying on first-wins tie behavior get a stable
    /// order. A part with no items yields an empty vec; the caller decides
    /// what "no outfit" means.
    pub fn combinations_for_part(&self, part: BodyPart) -> Vec<Combination<'_>> {
        let items = self.items_for_part(part);
        let mut combos = Vec::new();

        for r in 1..=items.len() {
            for idx in subsets_of_size(items.len(), r) {
                let picked: Vec<&ClothingItem> = idx.iter().map(|&i| items[i]).collect();
                if layering_is_valid(&picked) {
                    combos.push(Combination::new(picked));
                }
            }
        }

        tracing::debug!(part = %part, count = combos.len(), "generated clothing combinations");
        combos
    }
}

/// Layering rules: at most one each of Inner/Mid/Outer, at least one main
/// garment (Mid or Outer), and an Outer never worn on its own.
fn layering_is_valid(items: &[&ClothingItem]) -> bool {
    let count = |role: LayerRole| items.iter().filter(|i| i.layer == role).count();

    let outers = count(LayerRole::Outer);
    let mids = count(LayerRole::Mid);
    let inners = count(LayerRole::Inner);

    if outers > 1 || mids > 1 || inners > 1 {
        return false;
    }
    if mids == 0 && outers == 0 {
        return false;
    }
    // A shell needs something underneath it.
    if outers == 1 && mids == 0 && inners == 0 {
        return false;
    }
    true
}

/// All index subsets of size `r` out of `0..n`, lexicographic.
fn subsets_of_size(n: usize, r: usize) -> Vec<Vec<usize>> {
    fn rec(start: usize, n: usize, r: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == r {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            if n - i < r - cur.len() {
                break;
            }
            cur.push(i);
            rec(i + 1, n, r, cur, out);
            cur.pop();
        }
    }

    let mut out = Vec::new();
    if (1..=n).contains(&r) {
        rec(0, n, r, &mut Vec::new(), &mut out);
    }
    out
}

/// The reference cycling wardrobe.
pub fn reference_wardrobe() -> Wardrobe {
    use BodyPart::*;
    use LayerRole::*;

    Wardrobe::new(vec![
        // Upper body
        ClothingItem::new("Sweat Base", Inner, Upper).shift(-3.0, 0.0).complexity(0.5),
        ClothingItem::new("Thermal Base Long", Inner, Upper).shift(-6.0, -5.0).complexity(1.5),
        ClothingItem::new("Merino Base Long", Inner, Upper).shift(-5.0, -1.0).complexity(0.0),
        ClothingItem::new("Jersey", Mid, Upper).comfort(20.0, 30.0).shift(0.0, -1.0),
        ClothingItem::new("Thermal Jersey", Mid, Upper)
            .comfort(15.0, 18.0)
            .shift(-4.0, -5.0)
            .wind_boost(0.5)
            .complexity(2.0),
        ClothingItem::new("Arm Warmers", Accessory, Upper)
            .shift(-3.0, -2.0)
            .wind_boost(0.5)
            .removable(),
        ClothingItem::new("Wind Jacket", Outer, Upper)
            .comfort(15.0, 20.0)
            .windproof()
            .removable(),
        ClothingItem::new("Sportful Total Comfort Winter Jacket", Outer, Upper)
            .comfort(10.0, 15.0)
            .windproof()
            .waterproof()
            .complexity(2.5),
        // Lower body
        ClothingItem::new("Short Bibs", Mid, Lower).comfort(15.0, 35.0),
        ClothingItem::new("Sportful Fiandre Bibshort", Mid, Lower)
            .comfort(9.0, 22.0)
            .shift(-3.0, -4.0)
            .waterproof(),
        ClothingItem::new("Sportful Fiandre Long Bibs", Mid, Lower)
            .comfort(6.0, 15.0)
            .shift(-6.0, -7.0)
            .wind_boost(0.5)
            .waterproof(),
        ClothingItem::new("Winter Bibs", Outer, Lower)
            .comfort(3.0, 10.0)
            .waterproof()
            .windproof()
            .complexity(1.5),
        ClothingItem::new("Leg Warmers", Accessory, Lower).shift(-3.0, -4.0).removable(),
        // Feet
        ClothingItem::new("Cycling Socks", Inner, Feet).shift(-1.0, 0.0).complexity(-1.0),
        ClothingItem::new("Thermal Socks", Inner, Feet).shift(-5.0, -2.0).complexity(-1.0),
        ClothingItem::new("Cycling Shoes", Mid, Feet).comfort(18.0, 28.0).wind_boost(0.5),
        ClothingItem::new("Winter Shoes", Outer, Feet)
            .comfort(8.0, 15.0)
            .waterproof()
            .windproof()
            .complexity(2.0),
        ClothingItem::new("Toe Covers", Accessory, Feet)
            .shift(-2.0, -1.0)
            .wind_boost(0.5)
            .removable()
            .complexity(0.5),
        ClothingItem::new("Shoe Covers", Accessory, Feet)
            .shift(-4.0, -2.0)
            .windproof()
            .waterproof()
            .removable()
            .complexity(0.75),
        // Hands
        ClothingItem::new("Short Gloves", Mid, Hands).comfort(16.0, 35.0).removable(),
        ClothingItem::new("Light Gloves", Mid, Hands)
            .comfort(10.0, 23.0)
            .shift(-2.0, -1.0)
            .removable()
            .complexity(1.0),
        ClothingItem::new("Thermal Gloves", Outer, Hands)
            .comfort(2.0, 14.0)
            .waterproof()
            .windproof()
            .removable()
            .complexity(2.5),
        ClothingItem::new("Bare Hands", Mid, Hands).comfort(18.0, 40.0),
        // Head
        ClothingItem::new("Sportful Thermal Headband", Mid, Head)
            .comfort(5.0, 18.0)
            .windproof()
            .waterproof()
            .removable(),
        ClothingItem::new("Cap", Mid, Head).comfort(0.0, 15.0).windproof(),
        ClothingItem::new("Bare Head", Mid, Head).comfort(16.0, 40.0),
    ])
}
