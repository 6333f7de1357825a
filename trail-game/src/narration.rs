//! Fixed text shown to the player.

use crate::shopping::ShoppingCategory;

pub const INSTRUCTIONS_QUESTION: &str = "Do you need instructions?";

/// The instructions screen, one entry per output line. Empty strings are blank lines.
pub const INSTRUCTIONS: &[&str] = &[
    "This program simulates a trip over the Oregon Trail from",
    "Independence, Missouri to Oregon City, Oregon in 1847.",
    "Your family of five will cover the 2,000 mile Oregon Trail",
    "in 5-6 months --- If you make it alive.",
    "",
    "You had saved $900 to spend for the trip, and you've just",
    "   paid $200 for a wagon.",
    "You will need to spend the rest of your money on the",
    "   following items:",
    "",
    "     Oxen - You can spend $200-$300 on your team.",
    "            The more you spend, the faster you'll go",
    "            because you you'll have better animals",
    "",
    "     Food - The more you have, the less chance there",
    "            is of getting sick.",
    "",
    "     Ammunition - $1 buys a belt of 50 bullets",
    "            You will need bullets for attacks by animals",
    "            and bandits, and for hunting food.",
    "",
    "     Clothing - This is especially important for the cold",
    "            weather you will encounter when crossing",
    "            the mountains.",
    "",
    "     Miscellaneous Supplies - This includes medicine and",
    "            other things you will need for sickness",
    "            and emergency repairs.",
    "",
    "You can spend all your money before you start your trip -",
    "or you can save some of your cash to spend at forts along",
    "the way when you run low. However, items cost more at",
    "the forts. You can also go hunting along the way to get",
    "more food.",
    "Whenever you have to use your trusty rifle along the way,",
    "you will see the words: TYPE BANG. The faster you type",
    "in the word \"BANG\" and hit the \"RETURN\" key, the better",
    "luck you'll have with your gun.",
    "",
    "GOOD LUCK!!!",
];

/// Store prompt for one supply category.
#[must_use]
pub const fn shopping_prompt(category: ShoppingCategory) -> &'static str {
    match category {
        ShoppingCategory::Animals => "How much do you want to spend on your oxen team?",
        ShoppingCategory::Food => "How much do you want to spend on food?",
        ShoppingCategory::Ammunition => "How much do you want to spend on ammunition?",
        ShoppingCategory::Clothing => "How much do you want to spend on clothing?",
        ShoppingCategory::Misc => "How much do you want to spend on miscellaneous items?",
    }
}
