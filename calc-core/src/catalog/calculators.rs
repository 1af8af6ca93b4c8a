//! Calculator definitions, grouped by category in display order.

use crate::models::{CalculatorDefinition, CategoryId, InputField};

const GENDERS: &[&str] = &["Male", "Female"];

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub(super) static CALCULATORS: &[CalculatorDefinition] = &[
    // Financial
    CalculatorDefinition {
        id: "auto-loan",
        category_id: CategoryId::Financial,
        name: "Auto Loan Calculator",
        description: "Comprehensive car payment estimator including trade-in equity, sales tax, and dealer fees.",
        inputs: &[
            InputField::number("price", "Vehicle Price").unit("$").prefilled("35000"),
            InputField::number("sales_tax", "Sales Tax").unit("%").prefilled("7"),
            InputField::number("fees", "Title, Reg & Fees").unit("$").prefilled("350"),
            InputField::number("trade_in", "Trade-in Value").unit("$").prefilled("0"),
            InputField::number("owed_on_trade", "Amount Owed on Trade").unit("$").prefilled("0"),
            InputField::number("down_payment", "Down Payment (Cash)").unit("$").prefilled("5000"),
            InputField::number("rate", "Interest Rate").unit("%").prefilled("5.5"),
            InputField::number("term", "Loan Term").unit("months").prefilled("60"),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "mortgage",
        category_id: CategoryId::Financial,
        name: "Mortgage Calculator",
        description: "Calculate monthly mortgage payments with property tax, home insurance, and HOA fees.",
        inputs: &[
            InputField::number("home_price", "Home Price").unit("$").prefilled("400000"),
            InputField::number("down_payment", "Down Payment").unit("$").prefilled("80000"),
            InputField::number("rate", "Interest Rate").unit("%").prefilled("6.5"),
            InputField::number("term", "Loan Term").unit("years").prefilled("30"),
            InputField::number("property_tax", "Property Tax / Year").unit("$").prefilled("5000"),
            InputField::number("insurance", "Home Insurance / Year").unit("$").prefilled("1200"),
            InputField::number("hoa", "HOA Fees / Month").unit("$").prefilled("0"),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "compound-interest",
        category_id: CategoryId::Financial,
        name: "Investment Calculator",
        description: "Project investment growth with monthly contributions and compound frequency.",
        inputs: &[
            InputField::number("principal", "Initial Investment").unit("$").prefilled("10000"),
            InputField::number("monthly_contribution", "Monthly Contribution")
                .unit("$")
                .prefilled("500"),
            InputField::number("rate", "Annual Return Rate").unit("%").prefilled("8"),
            InputField::number("years", "Growth Period").unit("years").prefilled("20"),
            InputField::select("frequency", "Compound Frequency", &["Annually", "Monthly"]),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "loan",
        category_id: CategoryId::Financial,
        name: "Advanced Loan",
        description: "Amortization schedule with extra payments.",
        inputs: &[
            InputField::number("amount", "Loan Amount").unit("$"),
            InputField::number("rate", "Interest Rate").unit("%"),
            InputField::number("months", "Loan Term").unit("months"),
            InputField::number("extra", "Extra Monthly Payment").unit("$"),
            InputField::select("start_month", "Start Month", MONTHS),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "roi",
        category_id: CategoryId::Financial,
        name: "ROI Calculator",
        description: "Return on Investment with tax and inflation.",
        inputs: &[
            InputField::number("invested", "Initial Investment").unit("$"),
            InputField::number("returned", "Final Returned Value").unit("$"),
            InputField::number("years", "Investment Duration").unit("years").placeholder("1"),
            InputField::number("expenses", "Investment Costs/Fees").unit("$"),
            InputField::number("tax_rate", "Tax Rate on Profit").unit("%"),
            InputField::number("inflation", "Inflation Rate").unit("%"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "salary",
        category_id: CategoryId::Financial,
        name: "Hourly to Salary",
        description: "Convert hourly wage to annual income including overtime.",
        inputs: &[
            InputField::number("hourly", "Hourly Rate").unit("$"),
            InputField::number("hours", "Regular Hours / Week").unit("hrs").placeholder("40"),
            InputField::number("weeks", "Weeks Worked / Year").unit("wks").placeholder("52"),
            InputField::number("overtime_hours", "Overtime Hours / Week").unit("hrs"),
            InputField::number("overtime_rate", "Overtime Multiplier").unit("x").prefilled("1.5"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "vat",
        category_id: CategoryId::Financial,
        name: "VAT / Sales Tax",
        description: "Add or remove tax from a price.",
        inputs: &[
            InputField::number("amount", "Amount").unit("$"),
            InputField::number("tax", "Tax Rate").unit("%"),
            InputField::select(
                "mode",
                "Calculation Mode",
                &["Add Tax (Net to Gross)", "Remove Tax (Gross to Net)"],
            ),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "break-even",
        category_id: CategoryId::Financial,
        name: "Break-Even Analysis",
        description: "Determine units needed to cover costs.",
        inputs: &[
            InputField::number("fixed", "Total Fixed Costs").unit("$"),
            InputField::number("variable", "Variable Cost / Unit").unit("$"),
            InputField::number("price", "Selling Price / Unit").unit("$"),
            InputField::number("expected", "Expected Sales").unit("units"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "margin",
        category_id: CategoryId::Financial,
        name: "Profit Margin",
        description: "Calculate gross and net margin.",
        inputs: &[
            InputField::number("cost", "Cost").unit("$"),
            InputField::number("revenue", "Revenue").unit("$"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "rule-72",
        category_id: CategoryId::Financial,
        name: "Rule of 72",
        description: "Years to double your money.",
        inputs: &[InputField::number("rate", "Interest Rate").unit("%")],
        popular: false,
    },
    CalculatorDefinition {
        id: "credit-payoff",
        category_id: CategoryId::Financial,
        name: "Credit Card Payoff",
        description: "Months to clear debt.",
        inputs: &[
            InputField::number("balance", "Balance").unit("$"),
            InputField::number("rate", "APR").unit("%"),
            InputField::number("payment", "Monthly Payment").unit("$"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "net-worth",
        category_id: CategoryId::Financial,
        name: "Net Worth",
        description: "Assets minus liabilities.",
        inputs: &[
            InputField::number("assets", "Total Assets").unit("$"),
            InputField::number("liabilities", "Total Liabilities").unit("$"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "inflation",
        category_id: CategoryId::Financial,
        name: "Inflation Calculator",
        description: "Future value of money.",
        inputs: &[
            InputField::number("amount", "Present Amount").unit("$"),
            InputField::number("rate", "Inflation Rate").unit("%"),
            InputField::number("years", "Years").unit("yrs"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "down-payment",
        category_id: CategoryId::Financial,
        name: "Down Payment Goal",
        description: "Time to save for a house.",
        inputs: &[
            InputField::number("goal", "Target Amount").unit("$"),
            InputField::number("savings", "Current Savings").unit("$"),
            InputField::number("monthly", "Monthly Savings").unit("$"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "cd-ladder",
        category_id: CategoryId::Financial,
        name: "CD Calculator",
        description: "Certificate of Deposit returns.",
        inputs: &[
            InputField::number("deposit", "Deposit Amount").unit("$"),
            InputField::number("rate", "APY").unit("%"),
            InputField::number("months", "Term").unit("months"),
        ],
        popular: false,
    },

    // Health
    CalculatorDefinition {
        id: "bmi",
        category_id: CategoryId::Health,
        name: "BMI Calculator",
        description: "Body Mass Index with category.",
        inputs: &[
            InputField::number("weight", "Weight").unit("lbs").placeholder("160"),
            InputField::number("height_ft", "Height (Feet)").unit("ft").placeholder("5"),
            InputField::number("height_in", "Height (Inches)").unit("in").placeholder("9"),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "bmr",
        category_id: CategoryId::Health,
        name: "BMR & TDEE",
        description: "Basal Metabolic Rate & Total Energy Expenditure.",
        inputs: &[
            InputField::number("weight", "Weight").unit("lbs"),
            InputField::number("height_ft", "Height (Feet)").unit("ft"),
            InputField::number("height_in", "Height (Inches)").unit("in"),
            InputField::number("age", "Age").unit("years"),
            InputField::select("gender", "Gender", GENDERS),
            InputField::select(
                "activity",
                "Activity Level",
                &[
                    "Sedentary (Office Job)",
                    "Lightly Active (1-3 days)",
                    "Moderately Active (3-5 days)",
                    "Very Active (6-7 days)",
                    "Super Active (Physical Job)",
                ],
            ),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "water-intake",
        category_id: CategoryId::Health,
        name: "Water Intake",
        description: "Daily hydration needs.",
        inputs: &[InputField::number("weight", "Weight").unit("lbs")],
        popular: false,
    },
    CalculatorDefinition {
        id: "body-fat",
        category_id: CategoryId::Health,
        name: "Body Fat (Navy)",
        description: "Estimate body fat percentage.",
        inputs: &[
            InputField::select("gender", "Gender", GENDERS),
            InputField::number("waist", "Waist").unit("in"),
            InputField::number("neck", "Neck").unit("in"),
            InputField::number("height", "Height").unit("in"),
            InputField::number("hip", "Hip (Women only)").unit("in"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "ideal-weight",
        category_id: CategoryId::Health,
        name: "Ideal Weight",
        description: "Based on Robinson formula.",
        inputs: &[
            InputField::select("gender", "Gender", GENDERS),
            InputField::number("height_ft", "Height (Feet)").unit("ft"),
            InputField::number("height_in", "Height (Inches)").unit("in"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "macros",
        category_id: CategoryId::Health,
        name: "Macro Split",
        description: "Daily protein, carbs, fats.",
        inputs: &[
            InputField::number("cals", "Daily Calories").unit("kcal"),
            InputField::select("goal", "Goal", &["Maintenance", "Cutting", "Bulking"]),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "hr-max",
        category_id: CategoryId::Health,
        name: "Max Heart Rate",
        description: "Target zones for training.",
        inputs: &[InputField::number("age", "Age").unit("years")],
        popular: false,
    },
    CalculatorDefinition {
        id: "bac",
        category_id: CategoryId::Health,
        name: "BAC Estimator",
        description: "Blood Alcohol Content.",
        inputs: &[
            InputField::number("drinks", "Drinks").unit("count"),
            InputField::number("weight", "Weight").unit("lbs"),
            InputField::number("hours", "Hours Since First Drink").unit("hrs"),
            InputField::select("gender", "Gender", GENDERS),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "calorie-deficit",
        category_id: CategoryId::Health,
        name: "Calorie Deficit",
        description: "Time to lose weight.",
        inputs: &[
            InputField::number("maintenance", "Maintenance Cals").unit("kcal"),
            InputField::number("intake", "Daily Intake").unit("kcal"),
            InputField::number("goal_loss", "Goal Loss").unit("lbs"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "sleep",
        category_id: CategoryId::Health,
        name: "Sleep Calculator",
        description: "Wake up times based on cycles.",
        inputs: &[
            InputField::select("wake_hour", "Wake Hour", &["6", "7", "8", "9"]),
            InputField::select("wake_min", "Wake Minute", &["00", "15", "30", "45"]),
            InputField::select("ampm", "AM/PM", &["AM", "PM"]),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "waist-hip",
        category_id: CategoryId::Health,
        name: "Waist-to-Hip Ratio",
        description: "Health risk indicator.",
        inputs: &[
            InputField::number("waist", "Waist").unit("in"),
            InputField::number("hip", "Hip").unit("in"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "protein",
        category_id: CategoryId::Health,
        name: "Protein Intake",
        description: "Daily protein needs.",
        inputs: &[
            InputField::number("weight", "Weight").unit("lbs"),
            InputField::select("activity", "Activity", &["Sedentary", "Active", "Athlete"]),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "smoking-cost",
        category_id: CategoryId::Health,
        name: "Smoking Cost",
        description: "Financial cost of smoking.",
        inputs: &[
            InputField::number("packs", "Packs per Day").unit("count"),
            InputField::number("price", "Price per Pack").unit("$"),
            InputField::number("years", "Years").unit("yrs"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "pregnancy",
        category_id: CategoryId::Health,
        name: "Due Date",
        description: "Estimated delivery date.",
        inputs: &[
            InputField::number("month", "Last Period Month").unit("1-12"),
            InputField::number("day", "Last Period Day").unit("1-31"),
            InputField::number("year", "Last Period Year").unit("YYYY"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "step-convert",
        category_id: CategoryId::Health,
        name: "Steps to Miles",
        description: "Distance from steps.",
        inputs: &[
            InputField::number("steps", "Steps").unit("count"),
            InputField::number("height", "Height").unit("in"),
        ],
        popular: false,
    },

    // Math
    CalculatorDefinition {
        id: "percentage",
        category_id: CategoryId::Math,
        name: "Percentage",
        description: "Simple percentage calculations.",
        inputs: &[
            InputField::number("val", "Value"),
            InputField::number("percent", "Percentage").unit("%"),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "circle",
        category_id: CategoryId::Math,
        name: "Circle",
        description: "Area and circumference.",
        inputs: &[InputField::number("radius", "Radius").unit("units")],
        popular: false,
    },
    CalculatorDefinition {
        id: "fraction-add",
        category_id: CategoryId::Math,
        name: "Add Fractions",
        description: "Add two fractions.",
        inputs: &[
            InputField::number("n1", "Num 1"),
            InputField::number("d1", "Denom 1"),
            InputField::number("n2", "Num 2"),
            InputField::number("d2", "Denom 2"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "gcf-lcm",
        category_id: CategoryId::Math,
        name: "GCF & LCM",
        description: "Greatest Common Factor.",
        inputs: &[InputField::number("a", "Number A"), InputField::number("b", "Number B")],
        popular: false,
    },
    CalculatorDefinition {
        id: "mean-median",
        category_id: CategoryId::Math,
        name: "Mean Median Mode",
        description: "Stats for a list of numbers.",
        inputs: &[InputField::text("list", "Numbers (comma separated)").placeholder("1, 2, 3...")],
        popular: false,
    },
    CalculatorDefinition {
        id: "pythagorean",
        category_id: CategoryId::Math,
        name: "Pythagorean Thm",
        description: "Find hypotenuse.",
        inputs: &[InputField::number("a", "Side A"), InputField::number("b", "Side B")],
        popular: false,
    },
    CalculatorDefinition {
        id: "slope",
        category_id: CategoryId::Math,
        name: "Slope Calculator",
        description: "Slope between two points.",
        inputs: &[
            InputField::number("x1", "X1"),
            InputField::number("y1", "Y1"),
            InputField::number("x2", "X2"),
            InputField::number("y2", "Y2"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "quadratic",
        category_id: CategoryId::Math,
        name: "Quadratic Formula",
        description: "Solve ax² + bx + c = 0.",
        inputs: &[
            InputField::number("a", "a"),
            InputField::number("b", "b"),
            InputField::number("c", "c"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "factorial",
        category_id: CategoryId::Math,
        name: "Factorial",
        description: "Calculate n!",
        inputs: &[InputField::number("n", "Number (n)")],
        popular: false,
    },
    CalculatorDefinition {
        id: "permutation",
        category_id: CategoryId::Math,
        name: "Permutations (nPr)",
        description: "Ordered arrangements.",
        inputs: &[InputField::number("n", "n"), InputField::number("r", "r")],
        popular: false,
    },
    CalculatorDefinition {
        id: "combination",
        category_id: CategoryId::Math,
        name: "Combinations (nCr)",
        description: "Unordered selections.",
        inputs: &[InputField::number("n", "n"), InputField::number("r", "r")],
        popular: false,
    },
    CalculatorDefinition {
        id: "log",
        category_id: CategoryId::Math,
        name: "Logarithm",
        description: "Log base b of x.",
        inputs: &[
            InputField::number("x", "Value (x)"),
            InputField::number("b", "Base (b)").placeholder("10"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "random",
        category_id: CategoryId::Math,
        name: "Random Number",
        description: "Generate number in range.",
        inputs: &[InputField::number("min", "Min"), InputField::number("max", "Max")],
        popular: false,
    },
    CalculatorDefinition {
        id: "prime",
        category_id: CategoryId::Math,
        name: "Prime Checker",
        description: "Is it prime?",
        inputs: &[InputField::number("n", "Number")],
        popular: false,
    },
    CalculatorDefinition {
        id: "std-dev",
        category_id: CategoryId::Math,
        name: "Standard Deviation",
        description: "Population SD.",
        inputs: &[InputField::text("list", "Numbers (comma separated)")],
        popular: false,
    },
    CalculatorDefinition {
        id: "triangle-area",
        category_id: CategoryId::Math,
        name: "Triangle Area",
        description: "Base and Height.",
        inputs: &[InputField::number("base", "Base"), InputField::number("height", "Height")],
        popular: false,
    },
    CalculatorDefinition {
        id: "cone-vol",
        category_id: CategoryId::Math,
        name: "Cone Volume",
        description: "Volume of a cone.",
        inputs: &[InputField::number("radius", "Radius"), InputField::number("height", "Height")],
        popular: false,
    },
    CalculatorDefinition {
        id: "sphere-vol",
        category_id: CategoryId::Math,
        name: "Sphere Volume",
        description: "Volume of a sphere.",
        inputs: &[InputField::number("radius", "Radius")],
        popular: false,
    },
    CalculatorDefinition {
        id: "cylinder-vol",
        category_id: CategoryId::Math,
        name: "Cylinder Volume",
        description: "Volume of a cylinder.",
        inputs: &[InputField::number("radius", "Radius"), InputField::number("height", "Height")],
        popular: false,
    },
    CalculatorDefinition {
        id: "cube",
        category_id: CategoryId::Math,
        name: "Cube Calculator",
        description: "Surface area and volume.",
        inputs: &[InputField::number("side", "Side Length")],
        popular: false,
    },

    // Physics
    CalculatorDefinition {
        id: "velocity",
        category_id: CategoryId::Physics,
        name: "Velocity",
        description: "Speed, distance, time.",
        inputs: &[InputField::number("distance", "Distance"), InputField::number("time", "Time")],
        popular: false,
    },
    CalculatorDefinition {
        id: "force",
        category_id: CategoryId::Physics,
        name: "Force (F=ma)",
        description: "Newton's Second Law.",
        inputs: &[
            InputField::number("mass", "Mass").unit("kg"),
            InputField::number("acceleration", "Acceleration").unit("m/s²"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "ohms-law",
        category_id: CategoryId::Physics,
        name: "Ohm's Law",
        description: "Voltage, Current, Resistance.",
        inputs: &[
            InputField::number("i", "Current (I)").unit("Amps"),
            InputField::number("r", "Resistance (R)").unit("Ω"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "kinetic-energy",
        category_id: CategoryId::Physics,
        name: "Kinetic Energy",
        description: "Energy of motion.",
        inputs: &[
            InputField::number("mass", "Mass").unit("kg"),
            InputField::number("velocity", "Velocity").unit("m/s"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "potential-energy",
        category_id: CategoryId::Physics,
        name: "Potential Energy",
        description: "Gravitational PE.",
        inputs: &[
            InputField::number("mass", "Mass").unit("kg"),
            InputField::number("height", "Height").unit("m"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "power",
        category_id: CategoryId::Physics,
        name: "Power",
        description: "Work over time.",
        inputs: &[
            InputField::number("work", "Work").unit("J"),
            InputField::number("time", "Time").unit("s"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "work",
        category_id: CategoryId::Physics,
        name: "Work",
        description: "Force x Distance.",
        inputs: &[
            InputField::number("force", "Force").unit("N"),
            InputField::number("distance", "Distance").unit("m"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "momentum",
        category_id: CategoryId::Physics,
        name: "Momentum",
        description: "Mass x Velocity.",
        inputs: &[
            InputField::number("mass", "Mass").unit("kg"),
            InputField::number("velocity", "Velocity").unit("m/s"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "pressure",
        category_id: CategoryId::Physics,
        name: "Pressure",
        description: "Force per Area.",
        inputs: &[
            InputField::number("force", "Force").unit("N"),
            InputField::number("area", "Area").unit("m²"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "frequency",
        category_id: CategoryId::Physics,
        name: "Frequency",
        description: "From Wavelength.",
        inputs: &[
            InputField::number("wavelength", "Wavelength").unit("m"),
            InputField::number("speed", "Speed").unit("m/s").placeholder("343"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "torque",
        category_id: CategoryId::Physics,
        name: "Torque",
        description: "Rotational force.",
        inputs: &[
            InputField::number("force", "Force").unit("N"),
            InputField::number("radius", "Radius").unit("m"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "density-phys",
        category_id: CategoryId::Physics,
        name: "Density",
        description: "Material density.",
        inputs: &[
            InputField::number("mass", "Mass").unit("kg"),
            InputField::number("volume", "Volume").unit("m³"),
        ],
        popular: false,
    },

    // Chemistry
    CalculatorDefinition {
        id: "molarity",
        category_id: CategoryId::Chemistry,
        name: "Molarity",
        description: "Calculate molar concentration.",
        inputs: &[
            InputField::number("mass", "Mass of Solute").unit("g"),
            InputField::number("molar_mass", "Molar Mass").unit("g/mol"),
            InputField::number("volume", "Volume of Solution").unit("L"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "density-chem",
        category_id: CategoryId::Chemistry,
        name: "Density",
        description: "Mass and volume.",
        inputs: &[
            InputField::number("mass", "Mass").unit("g"),
            InputField::number("volume", "Volume").unit("mL"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "boyles",
        category_id: CategoryId::Chemistry,
        name: "Boyle's Law",
        description: "P1V1 = P2V2",
        inputs: &[
            InputField::number("p1", "P1"),
            InputField::number("v1", "V1"),
            InputField::number("p2", "P2"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "charles",
        category_id: CategoryId::Chemistry,
        name: "Charles's Law",
        description: "V1/T1 = V2/T2",
        inputs: &[
            InputField::number("v1", "V1"),
            InputField::number("t1", "T1 (K)"),
            InputField::number("v2", "V2"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "ideal-gas",
        category_id: CategoryId::Chemistry,
        name: "Ideal Gas Law",
        description: "PV = nRT (Calc n)",
        inputs: &[
            InputField::number("p", "Pressure (atm)"),
            InputField::number("v", "Volume (L)"),
            InputField::number("t", "Temp (K)"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "ph",
        category_id: CategoryId::Chemistry,
        name: "pH Calculator",
        description: "From H+ concentration.",
        inputs: &[InputField::number("h", "H+ Concentration").unit("M")],
        popular: false,
    },
    CalculatorDefinition {
        id: "dilution",
        category_id: CategoryId::Chemistry,
        name: "Dilution",
        description: "M1V1 = M2V2",
        inputs: &[
            InputField::number("m1", "M1"),
            InputField::number("v1", "V1"),
            InputField::number("m2", "M2"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "half-life",
        category_id: CategoryId::Chemistry,
        name: "Half Life",
        description: "Remaining quantity.",
        inputs: &[
            InputField::number("n0", "Initial Amount"),
            InputField::number("t", "Time Elapsed"),
            InputField::number("h", "Half Life"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "molality",
        category_id: CategoryId::Chemistry,
        name: "Molality",
        description: "Moles per kg solvent.",
        inputs: &[
            InputField::number("moles", "Moles Solute"),
            InputField::number("kg", "Kg Solvent"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "percent-yield",
        category_id: CategoryId::Chemistry,
        name: "Percent Yield",
        description: "Actual vs Theoretical.",
        inputs: &[
            InputField::number("actual", "Actual Yield"),
            InputField::number("theoretical", "Theoretical Yield"),
        ],
        popular: false,
    },

    // Construction
    CalculatorDefinition {
        id: "concrete",
        category_id: CategoryId::Construction,
        name: "Concrete Calculator",
        description: "Calculate concrete bags and cubic yards with waste factor.",
        inputs: &[
            InputField::number("length", "Length").unit("ft"),
            InputField::number("width", "Width").unit("ft"),
            InputField::number("depth", "Depth").unit("in"),
            InputField::number("quantity", "Quantity").unit("slabs").placeholder("1"),
            InputField::number("waste", "Waste Margin").unit("%").prefilled("10"),
            InputField::select(
                "bag_size",
                "Premix Bag Size",
                &["40 lb", "50 lb", "60 lb", "80 lb"],
            ),
        ],
        popular: true,
    },
    CalculatorDefinition {
        id: "paint",
        category_id: CategoryId::Construction,
        name: "Paint",
        description: "Gallons for walls.",
        inputs: &[InputField::number("sqft", "Wall Area").unit("sq ft")],
        popular: false,
    },
    CalculatorDefinition {
        id: "tile",
        category_id: CategoryId::Construction,
        name: "Tile Calculator",
        description: "Tiles needed for floor including grout spacing.",
        inputs: &[
            InputField::number("length", "Room Length").unit("ft"),
            InputField::number("width", "Room Width").unit("ft"),
            InputField::number("tile_width", "Tile Width").unit("in"),
            InputField::number("tile_height", "Tile Height").unit("in"),
            InputField::number("waste", "Waste Margin").unit("%").prefilled("15"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "carpet",
        category_id: CategoryId::Construction,
        name: "Carpet",
        description: "Sq yards needed.",
        inputs: &[
            InputField::number("length", "Length").unit("ft"),
            InputField::number("width", "Width").unit("ft"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "mulch",
        category_id: CategoryId::Construction,
        name: "Mulch / Soil",
        description: "Cubic yards for garden.",
        inputs: &[
            InputField::number("length", "Length").unit("ft"),
            InputField::number("width", "Width").unit("ft"),
            InputField::number("depth", "Depth").unit("in"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "gravel",
        category_id: CategoryId::Construction,
        name: "Gravel",
        description: "Tons of gravel needed.",
        inputs: &[
            InputField::number("length", "Length").unit("ft"),
            InputField::number("width", "Width").unit("ft"),
            InputField::number("depth", "Depth").unit("in"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "drywall",
        category_id: CategoryId::Construction,
        name: "Drywall Sheets",
        description: "4x8 sheets needed.",
        inputs: &[InputField::number("sqft", "Wall/Ceiling Area").unit("sq ft")],
        popular: false,
    },
    CalculatorDefinition {
        id: "roof-pitch",
        category_id: CategoryId::Construction,
        name: "Roof Pitch",
        description: "Angle of roof.",
        inputs: &[InputField::number("rise", "Rise"), InputField::number("run", "Run")],
        popular: false,
    },
    CalculatorDefinition {
        id: "board-foot",
        category_id: CategoryId::Construction,
        name: "Board Foot",
        description: "Lumber volume.",
        inputs: &[
            InputField::number("thick", "Thickness").unit("in"),
            InputField::number("width", "Width").unit("in"),
            InputField::number("length", "Length").unit("ft"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "wallpaper",
        category_id: CategoryId::Construction,
        name: "Wallpaper",
        description: "Rolls needed.",
        inputs: &[
            InputField::number("width", "Wall Width").unit("ft"),
            InputField::number("height", "Wall Height").unit("ft"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "btu",
        category_id: CategoryId::Construction,
        name: "AC BTU",
        description: "Cooling power needed.",
        inputs: &[InputField::number("sqft", "Room Area").unit("sq ft")],
        popular: false,
    },
    CalculatorDefinition {
        id: "stairs",
        category_id: CategoryId::Construction,
        name: "Stairs",
        description: "Steps count.",
        inputs: &[
            InputField::number("rise", "Total Rise").unit("in"),
            InputField::number("run", "Step Run").unit("in").placeholder("10"),
        ],
        popular: false,
    },

    // Sports
    CalculatorDefinition {
        id: "running-pace",
        category_id: CategoryId::Sports,
        name: "Running Pace",
        description: "Calculate pace per mile/km.",
        inputs: &[
            InputField::number("distance", "Distance").unit("miles"),
            InputField::number("time_min", "Time (Minutes)").unit("min"),
            InputField::number("time_sec", "Time (Seconds)").unit("sec"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "era",
        category_id: CategoryId::Sports,
        name: "Baseball ERA",
        description: "Earned Run Average.",
        inputs: &[
            InputField::number("runs", "Earned Runs"),
            InputField::number("innings", "Innings Pitched"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "qb-rating",
        category_id: CategoryId::Sports,
        name: "QB Rating",
        description: "NFL Passer Rating.",
        inputs: &[
            InputField::number("att", "Attempts"),
            InputField::number("comp", "Completions"),
            InputField::number("yds", "Yards"),
            InputField::number("td", "Touchdowns"),
            InputField::number("int", "Interceptions"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "one-rep-max",
        category_id: CategoryId::Sports,
        name: "1 Rep Max",
        description: "Max weight estimate.",
        inputs: &[
            InputField::number("weight", "Weight Lifted").unit("lbs"),
            InputField::number("reps", "Reps Performed"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "cricket-nrr",
        category_id: CategoryId::Sports,
        name: "Net Run Rate",
        description: "Cricket ranking stat.",
        inputs: &[
            InputField::number("runs_scored", "Runs Scored"),
            InputField::number("overs_faced", "Overs Faced"),
            InputField::number("runs_conceded", "Runs Conceded"),
            InputField::number("overs_bowled", "Overs Bowled"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "basketball-per",
        category_id: CategoryId::Sports,
        name: "Efficiency (PER)",
        description: "Simple efficiency.",
        inputs: &[
            InputField::number("pts", "Points"),
            InputField::number("reb", "Rebounds"),
            InputField::number("ast", "Assists"),
            InputField::number("stl", "Steals"),
            InputField::number("blk", "Blocks"),
            InputField::number("missed_fg", "Missed FG"),
            InputField::number("missed_ft", "Missed FT"),
            InputField::number("to", "Turnovers"),
            InputField::number("gp", "Games"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "slugging",
        category_id: CategoryId::Sports,
        name: "Slugging %",
        description: "Baseball power stat.",
        inputs: &[
            InputField::number("s", "Singles"),
            InputField::number("d", "Doubles"),
            InputField::number("t", "Triples"),
            InputField::number("hr", "Home Runs"),
            InputField::number("ab", "At Bats"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "batting-avg",
        category_id: CategoryId::Sports,
        name: "Batting Avg",
        description: "Hits / At Bats.",
        inputs: &[InputField::number("hits", "Hits"), InputField::number("ab", "At Bats")],
        popular: false,
    },
    CalculatorDefinition {
        id: "golf-handicap",
        category_id: CategoryId::Sports,
        name: "Golf Handicap",
        description: "Course diff.",
        inputs: &[
            InputField::number("score", "Score"),
            InputField::number("rating", "Course Rating"),
            InputField::number("slope", "Slope Rating"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "field-goal",
        category_id: CategoryId::Sports,
        name: "Field Goal %",
        description: "Success rate.",
        inputs: &[InputField::number("made", "Made"), InputField::number("att", "Attempted")],
        popular: false,
    },

    // Ecology
    CalculatorDefinition {
        id: "carbon-drive",
        category_id: CategoryId::Ecology,
        name: "Driving Carbon",
        description: "CO2 from driving.",
        inputs: &[
            InputField::number("distance", "Miles Driven").unit("miles"),
            InputField::number("mpg", "Vehicle MPG").unit("mpg"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "electricity-cost",
        category_id: CategoryId::Ecology,
        name: "Electricity Cost",
        description: "Cost to run device.",
        inputs: &[
            InputField::number("watts", "Watts"),
            InputField::number("hours", "Hours/Day"),
            InputField::number("rate", "Cost (cents/kWh)").unit("¢"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "water-shower",
        category_id: CategoryId::Ecology,
        name: "Shower Water",
        description: "Gallons used.",
        inputs: &[
            InputField::number("min", "Minutes"),
            InputField::number("gpm", "Flow Rate (GPM)").unit("gpm").placeholder("2.5"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "plastic",
        category_id: CategoryId::Ecology,
        name: "Plastic Waste",
        description: "Bottles per year.",
        inputs: &[InputField::number("daily", "Bottles per Day")],
        popular: false,
    },
    CalculatorDefinition {
        id: "solar",
        category_id: CategoryId::Ecology,
        name: "Solar Potential",
        description: "Panels needed.",
        inputs: &[
            InputField::number("bill", "Monthly Bill").unit("$"),
            InputField::number("sun", "Peak Sun Hours").unit("hrs").placeholder("5"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "tree-offset",
        category_id: CategoryId::Ecology,
        name: "Tree Offset",
        description: "Trees to absorb CO2.",
        inputs: &[InputField::number("co2", "CO2 Emissions").unit("lbs")],
        popular: false,
    },
    CalculatorDefinition {
        id: "meat-carbon",
        category_id: CategoryId::Ecology,
        name: "Meat Footprint",
        description: "CO2 from beef.",
        inputs: &[InputField::number("lbs", "Lbs per Week")],
        popular: false,
    },
    CalculatorDefinition {
        id: "recycling",
        category_id: CategoryId::Ecology,
        name: "Recycling Impact",
        description: "Energy saved (cans).",
        inputs: &[InputField::number("cans", "Aluminum Cans")],
        popular: false,
    },
    CalculatorDefinition {
        id: "commute-cost",
        category_id: CategoryId::Ecology,
        name: "Commute Cost",
        description: "Yearly cost.",
        inputs: &[
            InputField::number("miles", "Miles One Way"),
            InputField::number("mpg", "MPG"),
            InputField::number("price", "Gas Price"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "paper-waste",
        category_id: CategoryId::Ecology,
        name: "Paper Waste",
        description: "Trees consumed.",
        inputs: &[InputField::number("reams", "Reams per Month")],
        popular: false,
    },

    // Everyday
    CalculatorDefinition {
        id: "fuel-cost",
        category_id: CategoryId::Everyday,
        name: "Fuel Cost",
        description: "Trip cost.",
        inputs: &[
            InputField::number("distance", "Distance").unit("miles"),
            InputField::number("mpg", "Vehicle MPG").unit("mpg"),
            InputField::number("price", "Gas Price").unit("$"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "tip",
        category_id: CategoryId::Everyday,
        name: "Tip Calculator",
        description: "Gratuity split.",
        inputs: &[
            InputField::number("bill", "Bill Amount").unit("$"),
            InputField::number("percent", "Tip Percentage").unit("%").prefilled("20"),
            InputField::number("people", "Split Among").unit("people").prefilled("1"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "discount",
        category_id: CategoryId::Everyday,
        name: "Discount",
        description: "Sale savings.",
        inputs: &[
            InputField::number("price", "Original Price").unit("$"),
            InputField::number("discount", "Discount").unit("%"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "unit-price",
        category_id: CategoryId::Everyday,
        name: "Unit Price",
        description: "Best value.",
        inputs: &[
            InputField::number("price", "Price").unit("$"),
            InputField::number("units", "Quantity/Weight"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "pizza-party",
        category_id: CategoryId::Everyday,
        name: "Pizza Party",
        description: "Pizzas needed for a group.",
        inputs: &[
            InputField::number("adults", "Number of Adults"),
            InputField::number("children", "Number of Children"),
            InputField::select(
                "hunger",
                "Hunger Level",
                &["Light Snack (1-2 slices)", "Average (2-3 slices)", "Starving (3-4 slices)"],
            ),
            InputField::select(
                "size",
                "Pizza Size",
                &["Small (6 slices)", "Medium (8 slices)", "Large (10 slices)", "XL (12 slices)"],
            ),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "aspect-ratio",
        category_id: CategoryId::Everyday,
        name: "Aspect Ratio",
        description: "Resize dimensions.",
        inputs: &[
            InputField::number("w1", "Original Width"),
            InputField::number("h1", "Original Height"),
            InputField::number("w2", "New Width"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "screen-ppi",
        category_id: CategoryId::Everyday,
        name: "Screen PPI",
        description: "Pixel density.",
        inputs: &[
            InputField::number("width", "Width (px)"),
            InputField::number("height", "Height (px)"),
            InputField::number("diag", "Diagonal (in)"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "bandwidth",
        category_id: CategoryId::Everyday,
        name: "Download Time",
        description: "Time to transfer.",
        inputs: &[
            InputField::number("size", "File Size (GB)"),
            InputField::number("speed", "Speed (Mbps)"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "coffee",
        category_id: CategoryId::Everyday,
        name: "Coffee Ratio",
        description: "Water to beans.",
        inputs: &[
            InputField::number("water", "Water (g/ml)"),
            InputField::number("ratio", "Ratio (1:x)").placeholder("16"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "age",
        category_id: CategoryId::Everyday,
        name: "Age Calculator",
        description: "Years alive.",
        inputs: &[InputField::number("year", "Birth Year")],
        popular: false,
    },
    CalculatorDefinition {
        id: "time-duration",
        category_id: CategoryId::Everyday,
        name: "Time Duration",
        description: "Hours between.",
        inputs: &[
            InputField::number("h1", "Start Hour (24h)"),
            InputField::number("h2", "End Hour (24h)"),
        ],
        popular: false,
    },
    CalculatorDefinition {
        id: "reading-time",
        category_id: CategoryId::Everyday,
        name: "Reading Time",
        description: "Minutes to read.",
        inputs: &[InputField::number("words", "Word Count")],
        popular: false,
    },

    // Conversions
    CalculatorDefinition {
        id: "celsius-fahrenheit",
        category_id: CategoryId::Conversions,
        name: "C to F",
        description: "Temp convert.",
        inputs: &[InputField::number("celsius", "Celsius").unit("°C")],
        popular: false,
    },
    CalculatorDefinition {
        id: "fahrenheit-celsius",
        category_id: CategoryId::Conversions,
        name: "F to C",
        description: "Temp convert.",
        inputs: &[InputField::number("fahrenheit", "Fahrenheit").unit("°F")],
        popular: false,
    },
    CalculatorDefinition {
        id: "kg-lbs",
        category_id: CategoryId::Conversions,
        name: "Kg to Lbs",
        description: "Weight.",
        inputs: &[InputField::number("kg", "Kilograms").unit("kg")],
        popular: false,
    },
    CalculatorDefinition {
        id: "lbs-kg",
        category_id: CategoryId::Conversions,
        name: "Lbs to Kg",
        description: "Weight.",
        inputs: &[InputField::number("lbs", "Pounds").unit("lbs")],
        popular: false,
    },
    CalculatorDefinition {
        id: "miles-km",
        category_id: CategoryId::Conversions,
        name: "Miles to Km",
        description: "Distance.",
        inputs: &[InputField::number("miles", "Miles")],
        popular: false,
    },
    CalculatorDefinition {
        id: "km-miles",
        category_id: CategoryId::Conversions,
        name: "Km to Miles",
        description: "Distance.",
        inputs: &[InputField::number("km", "Kilometers")],
        popular: false,
    },
    CalculatorDefinition {
        id: "inch-cm",
        category_id: CategoryId::Conversions,
        name: "Inches to cm",
        description: "Length.",
        inputs: &[InputField::number("in", "Inches")],
        popular: false,
    },
    CalculatorDefinition {
        id: "cm-inch",
        category_id: CategoryId::Conversions,
        name: "cm to Inches",
        description: "Length.",
        inputs: &[InputField::number("cm", "Centimeters")],
        popular: false,
    },
    CalculatorDefinition {
        id: "oz-grams",
        category_id: CategoryId::Conversions,
        name: "Oz to Grams",
        description: "Weight.",
        inputs: &[InputField::number("oz", "Ounces")],
        popular: false,
    },
    CalculatorDefinition {
        id: "grams-oz",
        category_id: CategoryId::Conversions,
        name: "Grams to Oz",
        description: "Weight.",
        inputs: &[InputField::number("g", "Grams")],
        popular: false,
    },
    CalculatorDefinition {
        id: "liters-gal",
        category_id: CategoryId::Conversions,
        name: "Liters to Gal",
        description: "Volume.",
        inputs: &[InputField::number("l", "Liters")],
        popular: false,
    },
    CalculatorDefinition {
        id: "gal-liters",
        category_id: CategoryId::Conversions,
        name: "Gal to Liters",
        description: "Volume.",
        inputs: &[InputField::number("gal", "Gallons")],
        popular: false,
    },
];
