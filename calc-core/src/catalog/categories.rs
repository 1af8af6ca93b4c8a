use crate::models::{Category, CategoryId};

pub(super) static CATEGORIES: [Category; 10] = [
    Category {
        id: CategoryId::Financial,
        name: "Financial",
        description: "Loans, mortgages, interest, and investments.",
        icon_name: "Calculator",
        accent: "text-lime-400",
    },
    Category {
        id: CategoryId::Health,
        name: "Health",
        description: "BMI, BMR, calories, and body composition.",
        icon_name: "Heart",
        accent: "text-rose-400",
    },
    Category {
        id: CategoryId::Math,
        name: "Math",
        description: "Geometry, algebra, fractions, and statistics.",
        icon_name: "Sigma",
        accent: "text-cyan-400",
    },
    Category {
        id: CategoryId::Physics,
        name: "Physics",
        description: "Velocity, force, energy, and power.",
        icon_name: "Zap",
        accent: "text-violet-400",
    },
    Category {
        id: CategoryId::Chemistry,
        name: "Chemistry",
        description: "Molarity, pH, density, and reactions.",
        icon_name: "FlaskConical",
        accent: "text-fuchsia-400",
    },
    Category {
        id: CategoryId::Construction,
        name: "Construction",
        description: "Concrete, flooring, roofing, and paint.",
        icon_name: "Hammer",
        accent: "text-orange-400",
    },
    Category {
        id: CategoryId::Sports,
        name: "Sports",
        description: "Pace, scores, betting odds, and rankings.",
        icon_name: "Trophy",
        accent: "text-yellow-400",
    },
    Category {
        id: CategoryId::Ecology,
        name: "Ecology",
        description: "Carbon footprint, water usage, and recycling.",
        icon_name: "Leaf",
        accent: "text-emerald-400",
    },
    Category {
        id: CategoryId::Everyday,
        name: "Everyday",
        description: "Cooking, tips, fuel, and time.",
        icon_name: "Coffee",
        accent: "text-indigo-400",
    },
    Category {
        id: CategoryId::Conversions,
        name: "Conversions",
        description: "Length, weight, temperature, and currency.",
        icon_name: "ArrowLeftRight",
        accent: "text-pink-400",
    },
];
